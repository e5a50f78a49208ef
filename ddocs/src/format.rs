//! Output formatting utilities for the CLI

use colored::*;
use ddocs_core::{DocEntry, Language};
use tabled::{settings::Style, Table, Tabled};

/// Summary of a documentation set shown before searching it
pub fn format_language(language: &Language) -> String {
    let mut output = String::new();
    output.push_str(&language.display_name().bold().to_string());
    output.push('\n');
    output.push_str(&format!("Slug: {}", language.slug.cyan()));

    if let Some(release) = language.release.as_deref().filter(|r| !r.is_empty()) {
        output.push('\n');
        output.push_str(&format!("Release: {}", release.yellow()));
    }

    if let Some(home) = &language.links.home {
        output.push('\n');
        output.push_str(&format!("Home: {}", home));
    }

    if let Some(code) = &language.links.code {
        output.push('\n');
        output.push_str(&format!("Code: {}", code));
    }

    output.push('\n');
    output
}

/// Numbered result list, one `{index}: {name}` line per entry
pub fn format_entries(entries: &[DocEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}: {}\n", i, entry.name))
        .collect()
}

/// Table of available documentation sets
pub fn format_languages(languages: &[Language]) -> String {
    #[derive(Tabled)]
    struct LanguageRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Slug")]
        slug: String,
        #[tabled(rename = "Release")]
        release: String,
    }

    if languages.is_empty() {
        return "No documentation available\n".to_string();
    }

    let rows: Vec<LanguageRow> = languages
        .iter()
        .map(|lang| LanguageRow {
            name: lang.display_name(),
            slug: lang.slug.clone(),
            release: lang.release.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}
