//! Dispatch behaviour of the public command tree API

use std::sync::{Arc, Mutex};

use ddocs_core::{Action, Cli, Command, RunOutcome, StdTerminal};

type Log = Arc<Mutex<Vec<String>>>;

fn record(log: &Log, label: &str) -> impl Action + 'static {
    let log = log.clone();
    let label = label.to_string();
    move || {
        let log = log.clone();
        let label = label.clone();
        async move {
            log.lock().unwrap().push(label);
            anyhow::Ok(())
        }
    }
}

fn fail(log: &Log, label: &str) -> impl Action + 'static {
    let log = log.clone();
    let label = label.to_string();
    move || {
        let log = log.clone();
        let label = label.clone();
        async move {
            log.lock().unwrap().push(label.clone());
            Err::<(), _>(anyhow::anyhow!("{} exploded", label))
        }
    }
}

fn cli() -> Cli {
    Cli::new(Arc::new(StdTerminal::new()))
}

fn nested(log: &Log) -> Command {
    Command::new(["a"])
        .with_action(record(log, "act1"))
        .with_subcommand(Command::new(["b"]).with_action(record(log, "act2")))
}

#[test]
fn test_leaf_matches_exactly_its_triggers() {
    let leaf = Command::new(["x", "y"]);
    let empty: [&str; 0] = [];

    for token in ["x", "y"] {
        assert!(leaf.can_run(&[token]));
        assert!(leaf.can_run(&[token, "anything"]));
    }
    for token in ["", "z", "X", " x"] {
        assert!(!leaf.can_run(&[token]));
    }
    assert!(!leaf.can_run(&empty));
}

#[test]
fn test_parent_matches_when_either_child_does() {
    let parent = Command::new(["p"])
        .with_subcommand(Command::new(["c1"]))
        .with_subcommand(Command::new(["c2"]));

    let cases = vec![
        (vec!["p", "c1"], true),
        (vec!["p", "c2", "extra"], true),
        (vec!["p", "c3"], false),
        (vec!["p"], false),
        (vec!["q", "c1"], false),
        (vec![], false),
    ];

    for (tokens, expected) in cases {
        assert_eq!(parent.can_run(&tokens), expected, "tokens {:?}", tokens);
    }
}

#[test]
fn test_actions_collected_root_to_leaf() {
    let root = Command::new(["r"])
        .with_subcommand(Command::new(["a"]).with_subcommand(Command::new(["b"])));

    let path: Vec<_> = root
        .resolve(&["r", "a", "b"])
        .into_iter()
        .map(|c| c.name())
        .collect();

    assert_eq!(path, vec!["r", "a", "b"]);
}

#[tokio::test]
async fn test_empty_tokens_run_nothing() {
    let log: Log = Arc::default();
    let cli = cli()
        .with_command(Command::new(["search", "s"]).with_action(record(&log, "search")))
        .with_command(nested(&log));

    let empty: Vec<String> = Vec::new();
    assert_eq!(cli.run(&empty).await.unwrap(), RunOutcome::NoMatch);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_alias_scenario() {
    let log: Log = Arc::default();
    let cli = cli().with_command(Command::new(["search", "s"]).with_action(record(&log, "A")));

    cli.run(&["search"]).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["A"]);

    cli.run(&["s"]).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["A", "A"]);

    assert_eq!(cli.run(&["other"]).await.unwrap(), RunOutcome::NoMatch);
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_nested_scenario_requires_complete_path() {
    let log: Log = Arc::default();
    let cli = cli().with_command(nested(&log));

    assert_eq!(
        cli.run(&["a", "b"]).await.unwrap(),
        RunOutcome::Completed { actions: 2 }
    );
    assert_eq!(*log.lock().unwrap(), vec!["act1", "act2"]);

    log.lock().unwrap().clear();
    assert_eq!(cli.run(&["a", "x"]).await.unwrap(), RunOutcome::NoMatch);
    assert_eq!(cli.run(&["a"]).await.unwrap(), RunOutcome::NoMatch);
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failure_propagates_and_halts() {
    let log: Log = Arc::default();
    let cli = cli()
        .with_command(
            Command::new(["a"])
                .with_action(fail(&log, "act1"))
                .with_subcommand(Command::new(["b"]).with_action(record(&log, "act2"))),
        )
        .with_command(Command::new(["a"]).with_action(record(&log, "later")));

    let err = cli.run(&["a", "b"]).await.unwrap_err();

    assert_eq!(err.command(), "a");
    assert!(format!("{}", err).contains("act1 exploded"));
    assert_eq!(*log.lock().unwrap(), vec!["act1"]);
}
