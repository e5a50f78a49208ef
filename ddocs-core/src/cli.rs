//! Root dispatcher for top-level commands.

use std::io;
use std::sync::Arc;

use tracing::debug;

use crate::command::Command;
use crate::error::DispatchError;
use crate::terminal::Terminal;

/// Result of a successful [`Cli::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// No top-level command matched the tokens.
    NoMatch,
    /// At least one command matched and all of its actions completed.
    Completed { actions: usize },
}

/// Ordered set of top-level commands plus the terminal their actions use.
///
/// Every top-level command is matched against the same full token list.
/// Commands are alternatives, not a pipeline.
pub struct Cli {
    commands: Vec<Command>,
    terminal: Arc<dyn Terminal>,
}

impl Cli {
    /// Create a dispatcher with no commands.
    pub fn new(terminal: Arc<dyn Terminal>) -> Self {
        Self {
            commands: Vec::new(),
            terminal,
        }
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.add_command(command);
        self
    }

    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Shared handle to the terminal, for wiring into actions.
    pub fn terminal(&self) -> Arc<dyn Terminal> {
        Arc::clone(&self.terminal)
    }

    /// Write `text` to the terminal.
    pub fn write(&self, text: &str) -> io::Result<()> {
        self.terminal.write(text)
    }

    /// Read the next line from the terminal, newline included.
    pub async fn read_line(&self) -> io::Result<String> {
        self.terminal.read_line().await
    }

    /// Offer `tokens` to every top-level command in order.
    ///
    /// The first failing action aborts the run: later actions and later
    /// top-level commands are skipped.
    pub async fn run<S: AsRef<str> + Sync>(
        &self,
        tokens: &[S],
    ) -> Result<RunOutcome, DispatchError> {
        debug!(
            tokens = ?tokens.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>(),
            commands = self.commands.len(),
            "dispatching"
        );

        let mut actions = 0;
        for command in &self.commands {
            actions += command.execute(tokens).await?;
        }

        Ok(match actions {
            0 => RunOutcome::NoMatch,
            actions => RunOutcome::Completed { actions },
        })
    }
}
