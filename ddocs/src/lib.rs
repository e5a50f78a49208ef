//! ddocs CLI Library
//!
//! Interactive DevDocs search: pick a documentation set, pick an entry,
//! open it in the browser.
//!
//! The command tree itself lives in [`ddocs_core`]; this crate provides the
//! DevDocs HTTP client, configuration and the action bodies.
//!
//! ```no_run
//! use ddocs::client::DevDocsClient;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DevDocsClient::with_config(
//!     "https://devdocs.io/docs/docs.json".to_string(),
//!     "https://documents.devdocs.io".to_string(),
//!     10,
//!     3,
//!     Duration::from_millis(500),
//! )?;
//!
//! for language in client.list_languages().await?.iter().take(5) {
//!     println!("{} ({})", language.name, language.slug);
//! }
//! # Ok(())
//! # }
//! ```

/// Opening pages in a browser.
pub mod browser;

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the DevDocs index.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
