//! Test utilities for CLI testing
//!
//! Provides a mock DevDocs server and a browser stand-in for tests.

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use ddocs_core::{DocEntry, DocIndex, DocType, Language, LanguageLinks};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use crate::browser::Browser;

/// Mock server state
#[derive(Debug, Clone)]
pub struct MockDevDocsState {
    /// Contents of `docs.json`
    pub languages: Arc<Vec<Language>>,
    /// Index per documentation slug
    pub indexes: Arc<HashMap<String, DocIndex>>,
}

fn entry(name: &str, path: &str, kind: &str) -> DocEntry {
    DocEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: kind.to_string(),
    }
}

impl Default for MockDevDocsState {
    fn default() -> Self {
        let languages = vec![
            Language {
                name: "Rust".to_string(),
                slug: "rust".to_string(),
                kind: "rust".to_string(),
                version: Some(String::new()),
                release: Some("1.80.0".to_string()),
                links: LanguageLinks {
                    home: Some("https://www.rust-lang.org/".to_string()),
                    code: Some("https://github.com/rust-lang/rust".to_string()),
                },
            },
            Language {
                name: "Python".to_string(),
                slug: "python~3.12".to_string(),
                kind: "python".to_string(),
                version: Some("3.12".to_string()),
                release: Some("3.12.4".to_string()),
                links: LanguageLinks::default(),
            },
            Language {
                name: "Broken".to_string(),
                slug: "broken".to_string(),
                kind: "simple".to_string(),
                version: None,
                release: None,
                links: LanguageLinks::default(),
            },
        ];

        let mut indexes = HashMap::new();
        indexes.insert(
            "rust".to_string(),
            DocIndex {
                entries: vec![
                    entry("Vec", "std/vec/struct.vec", "std::vec"),
                    entry("VecDeque", "std/collections/struct.vecdeque", "std::collections"),
                    entry("HashMap", "std/collections/struct.hashmap", "std::collections"),
                    entry("Vec::push", "std/vec/struct.vec#method.push", "std::vec"),
                    entry("vec!", "std/macro.vec", "Macros"),
                ],
                types: vec![DocType {
                    name: "std::vec".to_string(),
                    slug: "std-vec".to_string(),
                    count: 2,
                }],
            },
        );
        indexes.insert(
            "python~3.12".to_string(),
            DocIndex {
                entries: vec![
                    entry("list", "library/stdtypes#list", "Built-in Types"),
                    entry("dict", "library/stdtypes#dict", "Built-in Types"),
                ],
                types: Vec::new(),
            },
        );

        Self {
            languages: Arc::new(languages),
            indexes: Arc::new(indexes),
        }
    }
}

/// Mock DevDocs server implementation
#[derive(Debug)]
pub struct MockDevDocs {
    state: MockDevDocsState,
    port: u16,
}

impl Default for MockDevDocs {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDevDocs {
    /// Create a new mock server
    pub fn new() -> Self {
        Self {
            state: MockDevDocsState::default(),
            port: 0, // Will be assigned when server starts
        }
    }

    /// Start the mock server and return its base URL.
    ///
    /// The documentation list is served at `{base}/docs/docs.json` and the
    /// indexes at `{base}/{slug}/index.json`.
    pub async fn start(mut self) -> Result<(Self, String)> {
        let app = self.create_router();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        self.port = addr.port();

        let server_url = format!("http://127.0.0.1:{}", self.port);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Mock server error: {}", e);
            }
        });

        // Give the server a moment to start and verify it's running
        for _ in 0..20 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok((self, server_url))
    }

    fn create_router(&self) -> Router {
        Router::new()
            .route("/docs/docs.json", get(docs_handler))
            .route("/:slug/index.json", get(index_handler))
            .with_state(self.state.clone())
    }
}

async fn docs_handler(State(state): State<MockDevDocsState>) -> Json<Vec<Language>> {
    Json(state.languages.as_ref().clone())
}

async fn index_handler(
    Path(slug): Path<String>,
    State(state): State<MockDevDocsState>,
) -> Response {
    if slug == "broken" {
        return (StatusCode::OK, "{\"entries\": [").into_response();
    }

    match state.indexes.get(&slug) {
        Some(index) => Json(index.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Browser stand-in that records opened URLs
#[derive(Debug, Default)]
pub struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
}

impl RecordingBrowser {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
