//! Opening documentation pages in a web browser.

use anyhow::{Context, Result};
use tracing::debug;

/// Something that can display a URL to the user.
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// The operating system's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        debug!(url, "opening in default browser");
        open::that(url).with_context(|| format!("Failed to open {} in browser", url))
    }
}
