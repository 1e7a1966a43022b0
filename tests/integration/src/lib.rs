//! Integration tests for Bookshelf server.
//!
//! These tests require a running Bookshelf server at `localhost:8080` whose
//! `CORS_ALLOW_ORIGINS` includes `http://localhost:3000` (the default).
//! They are marked `#[ignore]` so they don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p bookshelf-integration -- --ignored
//! ```

use std::sync::Once;

use anyhow::{Context, Result};
use serde_json::{Value, json};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint URL for the server.
fn endpoint_url() -> String {
    std::env::var("BOOKSHELF_ENDPOINT_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// Absolute URL for `path` on the server under test.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{}{path}", endpoint_url().trim_end_matches('/'))
}

/// Create an HTTP client for the server under test.
#[must_use]
pub fn client() -> reqwest::Client {
    init_tracing();
    reqwest::Client::new()
}

/// A book body with a title unique to this test run.
#[must_use]
pub fn unique_book(prefix: &str) -> Value {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    json!({
        "title": format!("{prefix}-{id}"),
        "author": "Integration Tester",
        "year": 2024,
    })
}

/// Create a book and return the stored JSON. Caller is responsible for cleanup.
pub async fn create_book(client: &reqwest::Client, body: &Value) -> Result<Value> {
    let resp = client
        .post(url("/books"))
        .json(body)
        .send()
        .await
        .context("POST /books")?;
    anyhow::ensure!(resp.status() == 200, "create failed: {}", resp.status());
    let book: Value = resp.json().await?;
    tracing::debug!(%book, "created test book");
    Ok(book)
}

/// Delete a book, ignoring failures.
pub async fn cleanup_book(client: &reqwest::Client, id: &Value) {
    let _ = client.delete(url(&format!("/books/{id}"))).send().await;
}

mod test_books;
mod test_clean_url;
mod test_cors;
mod test_health;
