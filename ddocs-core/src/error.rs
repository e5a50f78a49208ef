//! Error types for the ddocs system

use thiserror::Error;

/// Core error type for DevDocs lookups and user selections
#[derive(Error, Debug)]
pub enum DocsError {
    /// Selected index is not a number or is outside the result list
    #[error("Invalid selection '{input}' (must be 0-{max})", max = count.saturating_sub(1))]
    InvalidSelection { input: String, count: usize },

    /// Input stream closed before a line was read
    #[error("Input closed while waiting for {0}")]
    InputClosed(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DevDocs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Failure raised while dispatching a token list through a command tree.
///
/// A token list that matches nothing is not an error, see
/// [`crate::RunOutcome::NoMatch`].
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An action body returned an error. Remaining actions were skipped.
    #[error("Command '{command}' failed: {source:#}")]
    ActionFailed {
        command: String,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// Name of the command whose action failed
    pub fn command(&self) -> &str {
        match self {
            DispatchError::ActionFailed { command, .. } => command,
        }
    }
}
