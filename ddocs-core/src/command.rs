//! Command tree matched against positional argument tokens.
//!
//! A [`Command`] matches when the first token is one of its triggers and,
//! for a command with subcommands, when at least one subcommand matches the
//! remaining tokens. Matching is a pure traversal: the full list of actions
//! is resolved before any of them runs.

use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::DispatchError;

/// Operation attached to a [`Command`].
///
/// Any `Fn() -> impl Future<Output = anyhow::Result<()>>` closure is an
/// action, so commands are usually built from `move || async move { .. }`.
#[async_trait]
pub trait Action: Send + Sync {
    /// Run the action to completion.
    async fn run(&self) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> Action for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn run(&self) -> anyhow::Result<()> {
        (self)().await
    }
}

/// A node in the command tree.
///
/// # Examples
///
/// ```
/// use ddocs_core::Command;
///
/// let remote = Command::new(["remote"]).with_subcommand(Command::new(["add", "a"]));
///
/// assert!(remote.can_run(&["remote", "a"]));
/// assert!(!remote.can_run(&["remote"]));
/// ```
pub struct Command {
    triggers: Vec<String>,
    action: Box<dyn Action>,
    subcommands: Vec<Command>,
}

impl Command {
    /// Create a command matched by any of `triggers`, with a no-op action.
    pub fn new<I, S>(triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers.into_iter().map(Into::into).collect(),
            action: Box::new(|| async { Ok::<(), anyhow::Error>(()) }),
            subcommands: Vec::new(),
        }
    }

    /// Replace the action run when this command is selected.
    pub fn with_action<A: Action + 'static>(mut self, action: A) -> Self {
        self.action = Box::new(action);
        self
    }

    /// Add a subcommand, tried after any already present.
    pub fn with_subcommand(mut self, command: Command) -> Self {
        self.add_subcommand(command);
        self
    }

    pub fn add_trigger(&mut self, trigger: impl Into<String>) {
        self.triggers.push(trigger.into());
    }

    pub fn add_subcommand(&mut self, command: Command) {
        self.subcommands.push(command);
    }

    /// Primary trigger, used to name the command in errors and logs.
    pub fn name(&self) -> &str {
        self.triggers.first().map(String::as_str).unwrap_or("")
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// Whether this command has no subcommands.
    pub fn is_leaf(&self) -> bool {
        self.subcommands.is_empty()
    }

    pub fn action(&self) -> &dyn Action {
        self.action.as_ref()
    }

    fn matches_trigger(&self, token: &str) -> bool {
        self.triggers.iter().any(|t| t == token)
    }

    /// Whether `tokens` select this command through a complete path.
    ///
    /// A command with subcommands is only runnable when one of them matches
    /// the tokens after the first.
    pub fn can_run<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let Some((first, rest)) = tokens.split_first() else {
            return false;
        };

        if !self.matches_trigger(first.as_ref()) {
            return false;
        }

        self.is_leaf() || self.subcommands.iter().any(|c| c.can_run(rest))
    }

    /// Commands whose actions run for `tokens`, parent before child.
    ///
    /// Empty when [`Command::can_run`] is false. Every matching subcommand
    /// contributes its own path, depth-first in insertion order.
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&Command> {
        if !self.can_run(tokens) {
            return Vec::new();
        }

        let rest = &tokens[1..];
        let mut path = vec![self];
        for command in &self.subcommands {
            if command.can_run(rest) {
                path.extend(command.resolve(rest));
            }
        }
        path
    }

    /// Actions to run for `tokens`, in execution order.
    pub fn collect_actions<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<&dyn Action> {
        self.resolve(tokens)
            .into_iter()
            .map(Command::action)
            .collect()
    }

    /// Run every resolved action in order, one at a time.
    ///
    /// Stops at the first failing action. Returns how many actions ran.
    pub async fn execute<S: AsRef<str>>(&self, tokens: &[S]) -> Result<usize, DispatchError> {
        let path = self.resolve(tokens);
        if path.is_empty() {
            trace!(command = self.name(), "no match");
            return Ok(0);
        }

        debug!(
            command = self.name(),
            steps = path.len(),
            "executing command path"
        );

        for command in &path {
            trace!(command = command.name(), "running action");
            command
                .action
                .run()
                .await
                .map_err(|source| DispatchError::ActionFailed {
                    command: command.name().to_string(),
                    source,
                })?;
        }

        Ok(path.len())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("triggers", &self.triggers)
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}
