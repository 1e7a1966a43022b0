//! Bookshelf business logic.
//!
//! - [`storage`]: the SQLite-backed [`BookStore`](storage::BookStore)
//! - [`provider`]: [`Bookshelf`](provider::Bookshelf), one `handle_*` method per operation
//! - [`handler`]: the bridge from the HTTP layer to the provider
#![allow(missing_docs, clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod handler;
pub mod provider;
pub mod storage;

pub use handler::BookshelfHttpHandler;
pub use provider::Bookshelf;
pub use storage::{BookStore, StoreError};
