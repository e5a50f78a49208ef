//! ddocs Core Library
//!
//! Command dispatch engine, terminal abstraction and DevDocs data types
//! shared by the `ddocs` binary and its tests.

pub mod cli;
pub mod command;
pub mod error;
pub mod terminal;
pub mod types;

// Re-export commonly used types
pub use cli::{Cli, RunOutcome};
pub use command::{Action, Command};
pub use error::*;
pub use terminal::{StdTerminal, Terminal};
pub use types::*;

#[cfg(any(test, feature = "test-utils"))]
pub use terminal::ScriptedTerminal;
