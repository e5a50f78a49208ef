//! CLI command definitions and handlers
//!
//! - [`commands`] - Argument parsing and command tree wiring
//! - [`handlers`] - Command action bodies

mod commands;
mod handlers;

pub use commands::*;
pub use handlers::*;
