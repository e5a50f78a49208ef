//! CLI configuration
//!
//! Settings are resolved from defaults, then environment variables, then
//! command-line flags. There is no configuration file.

use anyhow::Result;

/// Default location of the documentation list
pub const DEFAULT_DOCS_URL: &str = "https://devdocs.io/docs/docs.json";

/// Default base URL of the per-documentation indexes
pub const DEFAULT_DOCUMENTS_URL: &str = "https://documents.devdocs.io";

/// Default base URL of the pages opened in the browser
pub const DEFAULT_SITE_URL: &str = "https://devdocs.io";

/// CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// URL of the documentation list (`docs.json`)
    pub docs_url: String,

    /// Base URL of `{slug}/index.json`
    pub documents_url: String,

    /// Base URL of documentation pages
    pub site_url: String,

    /// Enable verbose logging
    pub verbose: bool,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_string(),
            documents_url: DEFAULT_DOCUMENTS_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            verbose: false,
            timeout: 10,
        }
    }
}

impl CliConfig {
    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Priority chain (lowest to highest):
/// 1. Defaults
/// 2. Environment variables
/// 3. CLI arguments
///
/// Values set explicitly on the builder are never replaced by
/// [`ConfigBuilder::with_env_overrides`], so flags are applied first.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    docs_url: Option<String>,
    documents_url: Option<String>,
    site_url: Option<String>,
    verbose: Option<bool>,
    timeout: Option<u64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the documentation list URL (with validation)
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        Self::validate_url("Docs URL", &url)?;
        self.docs_url = Some(url);
        Ok(self)
    }

    /// Set the index base URL (with validation)
    pub fn with_documents_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        Self::validate_url("Documents URL", &url)?;
        self.documents_url = Some(url);
        Ok(self)
    }

    /// Set the documentation site URL (with validation)
    pub fn with_site_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        Self::validate_url("Site URL", &url)?;
        self.site_url = Some(url);
        Ok(self)
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Set timeout (with validation)
    pub fn with_timeout(mut self, timeout: u64) -> Result<Self> {
        Self::validate_timeout(timeout)?;
        self.timeout = Some(timeout);
        Ok(self)
    }

    /// Fill unset values from `DDOCS_*` environment variables.
    ///
    /// Invalid values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if self.docs_url.is_none() {
            self.docs_url = Self::env_url("DDOCS_DOCS_URL");
        }

        if self.documents_url.is_none() {
            self.documents_url = Self::env_url("DDOCS_DOCUMENTS_URL");
        }

        if self.site_url.is_none() {
            self.site_url = Self::env_url("DDOCS_SITE_URL");
        }

        if self.verbose.is_none() {
            if let Ok(verbose) = std::env::var("DDOCS_VERBOSE") {
                self.verbose = Some(verbose.to_lowercase() == "true" || verbose == "1");
            }
        }

        if self.timeout.is_none() {
            if let Ok(timeout) = std::env::var("DDOCS_TIMEOUT") {
                if let Ok(timeout) = timeout.parse() {
                    if Self::validate_timeout(timeout).is_ok() {
                        self.timeout = Some(timeout);
                    }
                }
            }
        }

        self
    }

    fn env_url(var: &str) -> Option<String> {
        std::env::var(var)
            .ok()
            .filter(|url| Self::validate_url(var, url).is_ok())
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<CliConfig> {
        let defaults = CliConfig::default();

        let docs_url = self.docs_url.unwrap_or(defaults.docs_url);
        let documents_url = self.documents_url.unwrap_or(defaults.documents_url);
        let site_url = self.site_url.unwrap_or(defaults.site_url);
        let timeout = self.timeout.unwrap_or(defaults.timeout);

        Self::validate_url("Docs URL", &docs_url)?;
        Self::validate_url("Documents URL", &documents_url)?;
        Self::validate_url("Site URL", &site_url)?;
        Self::validate_timeout(timeout)?;

        Ok(CliConfig {
            docs_url,
            documents_url,
            site_url,
            verbose: self.verbose.unwrap_or(defaults.verbose),
            timeout,
        })
    }

    /// Validate URL format
    fn validate_url(what: &str, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(anyhow::anyhow!("{} cannot be empty", what));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "{} must start with http:// or https://",
                what
            ));
        }

        Ok(())
    }

    /// Validate timeout value
    fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(anyhow::anyhow!("Timeout must be greater than 0"));
        }

        if timeout > 300 {
            return Err(anyhow::anyhow!(
                "Timeout must be less than or equal to 300 seconds"
            ));
        }

        Ok(())
    }
}
