//! DevDocs index data types
//!
//! Models for the two JSON documents the client reads: the list of
//! available documentation sets (`docs.json`) and the per-set entry index
//! (`{slug}/index.json`). Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use crate::error::{DocsError, Result};

/// Project links attached to a documentation set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// A documentation set listed in `docs.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Display name, e.g. "Rust"
    pub name: String,
    /// URL slug, e.g. "rust" or "python~3.12"
    pub slug: String,
    /// Scraper type
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Version qualifier shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Upstream release the docs were built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(default)]
    pub links: LanguageLinks,
}

impl Language {
    /// Exact match on either the display name or the slug.
    pub fn matches(&self, query: &str) -> bool {
        self.name == query || self.slug == query
    }

    /// Name with its version qualifier, if any.
    pub fn display_name(&self) -> String {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{} {}", self.name, version),
            _ => self.name.clone(),
        }
    }
}

/// First language matching `query` by exact name or slug.
pub fn find_language<'a>(languages: &'a [Language], query: &str) -> Option<&'a Language> {
    languages.iter().find(|lang| lang.matches(query))
}

/// A single page or anchor in a documentation set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    pub name: String,
    /// Path relative to the set's root, possibly with a `#fragment`
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl DocEntry {
    /// Browser URL of this entry on the DevDocs site.
    pub fn url(&self, site_url: &str, slug: &str) -> String {
        format!("{}/{}/{}", site_url.trim_end_matches('/'), slug, self.path)
    }
}

/// Entry category with its entry count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocType {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub count: u32,
}

/// Contents of `{slug}/index.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocIndex {
    pub entries: Vec<DocEntry>,
    #[serde(default)]
    pub types: Vec<DocType>,
}

impl DocIndex {
    /// Entries whose name contains `query`, in index order.
    ///
    /// Matching is case-sensitive. An empty query matches every entry.
    pub fn search(&self, query: &str) -> Vec<DocEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.name.contains(query))
            .cloned()
            .collect()
    }
}

/// Parse a user-typed index into a position in a list of `count` results.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let invalid = || DocsError::InvalidSelection {
        input: trimmed.to_string(),
        count,
    };

    let index: usize = trimmed.parse().map_err(|_| invalid())?;
    if index >= count {
        return Err(invalid());
    }
    Ok(index)
}
