//! Bookshelf response output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookshelf_core::BookId;

/// A stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned id.
    pub id: BookId,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Publication year.
    pub year: u32,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
}

/// Output of `DELETE /books/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBookOutput {
    /// Confirmation message.
    pub success: String,
}

impl Default for DeleteBookOutput {
    fn default() -> Self {
        Self {
            success: "Record deleted".to_owned(),
        }
    }
}

/// Output of `POST /clean-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanUrlOutput {
    /// The normalized URL.
    pub processed_url: String,
}
