//! Error types for the Bookshelf core.

/// Core error type for Bookshelf infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum BookshelfCoreError {
    /// Invalid book identifier.
    #[error("invalid book id: {0} (must be a positive integer)")]
    InvalidBookId(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
