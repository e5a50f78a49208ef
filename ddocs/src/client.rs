//! HTTP client for the DevDocs index.

use anyhow::{Context, Result};
use ddocs_core::{find_language, DocEntry, DocIndex, Language};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Normalize a base URL by removing trailing slashes.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// HTTP client for the two DevDocs JSON documents the CLI reads.
///
/// - the documentation list (`docs.json`), one entry per language
/// - the entry index of a single documentation set (`{slug}/index.json`)
///
/// # Retry Logic
///
/// Requests that fail before a response arrives (connection refused,
/// timeout) are retried with a delay that grows linearly with each attempt.
/// HTTP error statuses are not retried.
///
/// # Examples
///
/// ```no_run
/// use ddocs::client::DevDocsClient;
/// use std::time::Duration;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = DevDocsClient::with_config(
///     "https://devdocs.io/docs/docs.json".to_string(),
///     "https://documents.devdocs.io".to_string(),
///     10,  // timeout in seconds
///     3,   // max retries
///     Duration::from_millis(500),  // initial retry delay
/// )?;
///
/// if let Some(rust) = client.find_language("rust").await? {
///     let hits = client.search_entries(&rust.slug, "Vec").await?;
///     println!("{} entries", hits.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DevDocsClient {
    client: Client,
    docs_url: String,
    documents_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl DevDocsClient {
    /// Create a new DevDocs client.
    ///
    /// # Arguments
    ///
    /// * `docs_url` - Full URL of the documentation list
    /// * `documents_url` - Base URL under which `{slug}/index.json` lives
    /// * `timeout_secs` - Request timeout in seconds
    /// * `max_retries` - Maximum number of retry attempts for failed requests
    /// * `retry_delay` - Initial delay between retries
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(
        docs_url: String,
        documents_url: String,
        timeout_secs: u64,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("ddocs/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            docs_url: docs_url.trim().to_string(),
            documents_url: normalize_url(&documents_url),
            max_retries,
            retry_delay,
        })
    }

    /// Process an HTTP response and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP status code indicates failure (4xx or 5xx)
    /// - The response body cannot be read
    /// - The JSON cannot be deserialized
    async fn handle_response<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", endpoint))?;

        if !status.is_success() {
            let error_msg = match status {
                StatusCode::NOT_FOUND => format!("{} not found", endpoint),
                StatusCode::TOO_MANY_REQUESTS => format!("Rate limited by {}", endpoint),
                StatusCode::SERVICE_UNAVAILABLE => format!("Service unavailable at {}", endpoint),
                s if s.is_server_error() => format!("Server error at {}: {}", endpoint, status),
                _ => format!("HTTP {} error at {}: {}", status, endpoint, text),
            };
            return Err(anyhow::anyhow!(error_msg));
        }

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON response from {}", endpoint))
    }

    /// GET `url` and decode the JSON response, retrying connection failures.
    ///
    /// # Errors
    ///
    /// Returns an error if all retry attempts fail or the response is not
    /// valid JSON of the expected shape.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            debug!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    return Self::handle_response(response, url).await;
                }
                Err(e) => {
                    // Only retry when no response arrived
                    let should_retry = e.is_connect() || e.is_timeout() || e.is_request();
                    warn!(url, attempt, error = %e, "request failed");
                    last_error = Some(e);

                    if attempt < self.max_retries && should_retry {
                        tokio::time::sleep(self.retry_delay * (attempt + 1)).await;
                    } else {
                        break;
                    }
                }
            }
        }

        match last_error {
            Some(e) => Err(anyhow::Error::new(e).context(format!(
                "Failed to reach {} after {} attempts",
                url,
                self.max_retries + 1
            ))),
            None => Err(anyhow::anyhow!("No request sent to {}", url)),
        }
    }

    /// Retrieve every documentation set DevDocs offers.
    pub async fn list_languages(&self) -> Result<Vec<Language>> {
        self.get_json(&self.docs_url).await
    }

    /// Look up a documentation set by exact name or slug.
    ///
    /// # Returns
    ///
    /// Returns `None` when no set matches; this is not an error.
    pub async fn find_language(&self, query: &str) -> Result<Option<Language>> {
        let languages = self.list_languages().await?;
        Ok(find_language(&languages, query).cloned())
    }

    /// Retrieve the entry index of a documentation set.
    ///
    /// # Arguments
    ///
    /// * `slug` - Slug of the documentation set, e.g. "rust"
    pub async fn get_index(&self, slug: &str) -> Result<DocIndex> {
        if slug.trim().is_empty() {
            return Err(anyhow::anyhow!("Documentation slug cannot be empty"));
        }

        let url = format!("{}/{}/index.json", self.documents_url, slug);
        self.get_json(&url).await
    }

    /// Entries of a documentation set whose name contains `query`.
    pub async fn search_entries(&self, slug: &str, query: &str) -> Result<Vec<DocEntry>> {
        let index = self.get_index(slug).await?;
        let hits = index.search(query);
        debug!(slug, query, hits = hits.len(), total = index.entries.len(), "searched index");
        Ok(hits)
    }
}
