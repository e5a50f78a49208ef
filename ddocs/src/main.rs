//! ddocs
//!
//! Search DevDocs from the terminal and open the chosen page.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ddocs::browser::SystemBrowser;
use ddocs::cli::{build_cli, AppContext, Args};
use ddocs::config::CliConfig;
use ddocs_core::{RunOutcome, StdTerminal};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Flags first, then the environment fills whatever is still unset
    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.verbose);
    debug!(?config, "configuration resolved");

    let ctx = match AppContext::new(
        config.clone(),
        Arc::new(StdTerminal::new()),
        Arc::new(SystemBrowser),
    ) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let cli = build_cli(ctx, &args.tokens);

    match cli.run(&args.tokens).await {
        Ok(RunOutcome::NoMatch) => {
            debug!(tokens = ?args.tokens, "no command matched");
        }
        Ok(RunOutcome::Completed { actions }) => {
            debug!(actions, "done");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if config.verbose {
                eprintln!("Error details: {:?}", e);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<CliConfig> {
    let mut builder = CliConfig::builder();

    if let Some(ref url) = args.docs_url {
        builder = builder.with_docs_url(url)?;
    }
    if let Some(ref url) = args.documents_url {
        builder = builder.with_documents_url(url)?;
    }
    if let Some(ref url) = args.site_url {
        builder = builder.with_site_url(url)?;
    }
    if let Some(timeout) = args.timeout {
        builder = builder.with_timeout(timeout)?;
    }
    if args.verbose {
        builder = builder.with_verbose(true);
    }

    builder.with_env_overrides().build()
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
