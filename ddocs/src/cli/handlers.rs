//! Command action bodies

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ddocs_core::terminal::strip_newline;
use ddocs_core::{parse_selection, DocsError, Terminal};
use tracing::{debug, info};

use crate::browser::Browser;
use crate::client::DevDocsClient;
use crate::config::CliConfig;
use crate::format::{format_entries, format_language, format_languages};

/// Number of retries for DevDocs requests
pub const MAX_RETRIES: u32 = 3;

/// Initial delay between DevDocs request retries
pub const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Collaborators shared by every command action
pub struct AppContext {
    pub client: DevDocsClient,
    pub terminal: Arc<dyn Terminal>,
    pub browser: Arc<dyn Browser>,
    pub config: CliConfig,
}

impl AppContext {
    /// Build the context from a resolved configuration.
    pub fn new(
        config: CliConfig,
        terminal: Arc<dyn Terminal>,
        browser: Arc<dyn Browser>,
    ) -> Result<Self> {
        let client = DevDocsClient::with_config(
            config.docs_url.clone(),
            config.documents_url.clone(),
            config.timeout,
            MAX_RETRIES,
            RETRY_DELAY,
        )?;

        Ok(Self {
            client,
            terminal,
            browser,
            config,
        })
    }

    /// Context pointed at a mock server rooted at `base_url`.
    #[cfg(test)]
    pub(crate) fn for_tests(
        base_url: &str,
        terminal: Arc<dyn Terminal>,
        browser: Arc<dyn Browser>,
    ) -> Self {
        let config = CliConfig {
            docs_url: format!("{}/docs/docs.json", base_url),
            documents_url: base_url.to_string(),
            timeout: 5,
            ..CliConfig::default()
        };
        let client = DevDocsClient::with_config(
            config.docs_url.clone(),
            config.documents_url.clone(),
            config.timeout,
            0,
            Duration::from_millis(10),
        )
        .unwrap();

        Self {
            client,
            terminal,
            browser,
            config,
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        Ok(self.terminal.write(text)?)
    }

    /// Read one line of input without its newline.
    async fn prompt_line(&self, what: &str) -> Result<String> {
        let line = self.terminal.read_line().await.map_err(DocsError::Io)?;
        if line.is_empty() {
            return Err(DocsError::InputClosed(what.to_string()).into());
        }
        Ok(strip_newline(&line).to_string())
    }
}

/// Handle the interactive search
///
/// `args` are the full command tokens; the language may be given as the
/// token after the command name. A missing or empty token is asked for.
pub async fn handle_search(ctx: &AppContext, args: &[String]) -> Result<()> {
    let lang = match args.get(1).filter(|lang| !lang.is_empty()) {
        Some(lang) => lang.clone(),
        None => {
            ctx.write("Enter language\n")?;
            ctx.prompt_line("language").await?
        }
    };

    let Some(language) = ctx.client.find_language(&lang).await? else {
        debug!(query = %lang, "no documentation matched");
        ctx.write("Not a valid language! Try a different query.\n")?;
        return Ok(());
    };

    ctx.write(&format_language(&language))?;
    ctx.write(&format!("\nSearch inside language {}:\n", lang))?;
    let query = ctx.prompt_line("search query").await?;

    ctx.write(&format!("\nSearching for {} in {}...\n", query, lang))?;
    let entries = ctx.client.search_entries(&language.slug, &query).await?;
    if entries.is_empty() {
        ctx.write("No results 😢\n")?;
        return Ok(());
    }

    ctx.write(&format_entries(&entries))?;
    ctx.write("Enter index of name: \n")?;
    let choice = ctx.prompt_line("entry index").await?;
    let index = parse_selection(&choice, entries.len())?;

    let url = entries[index].url(&ctx.config.site_url, &language.slug);
    info!(%url, "opening documentation page");
    ctx.browser.open(&url)
}

/// Handle the list command
pub async fn handle_list(ctx: &AppContext) -> Result<()> {
    let languages = ctx.client.list_languages().await?;
    ctx.write(&format_languages(&languages))
}

/// Handle the help command
pub fn handle_help(ctx: &AppContext) -> Result<()> {
    ctx.write(USAGE)
}

const USAGE: &str = "\
Usage: ddocs [OPTIONS] <COMMAND> [ARGS]

Commands:
  search, s [LANGUAGE]  Search the entries of a documentation set and open one
  list, ls              List available documentation sets
  help, h               Show this message

Run `ddocs --help` for options.
";
