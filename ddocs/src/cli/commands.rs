//! Argument parsing and command tree construction

use std::sync::Arc;

use clap::Parser;
use ddocs_core::{Cli, Command};

use super::handlers::{handle_help, handle_list, handle_search, AppContext};

/// Search DevDocs from the terminal
#[derive(Parser, Debug)]
#[command(name = "ddocs")]
#[command(version, about = "Search DevDocs from the terminal", long_about = None)]
pub struct Args {
    /// URL of the documentation list
    #[arg(long)]
    pub docs_url: Option<String>,

    /// Base URL of the per-documentation indexes
    #[arg(long)]
    pub documents_url: Option<String>,

    /// Base URL of the pages opened in the browser
    #[arg(long)]
    pub site_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command and its arguments, e.g. `search rust`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Wire the top-level commands.
///
/// `tokens` is the same list later passed to [`Cli::run`]; actions read
/// their positional arguments from it.
pub fn build_cli(ctx: Arc<AppContext>, tokens: &[String]) -> Cli {
    let tokens: Arc<[String]> = tokens.into();

    let search = {
        let ctx = ctx.clone();
        let tokens = tokens.clone();
        Command::new(["search", "s"]).with_action(move || {
            let ctx = ctx.clone();
            let tokens = tokens.clone();
            async move { handle_search(&ctx, &tokens).await }
        })
    };

    let list = {
        let ctx = ctx.clone();
        Command::new(["list", "ls"]).with_action(move || {
            let ctx = ctx.clone();
            async move { handle_list(&ctx).await }
        })
    };

    let help = {
        let ctx = ctx.clone();
        Command::new(["help", "h"]).with_action(move || {
            let ctx = ctx.clone();
            async move { handle_help(&ctx) }
        })
    };

    Cli::new(ctx.terminal.clone())
        .with_command(search)
        .with_command(list)
        .with_command(help)
}
