//! Bookshelf operation enum.

use std::fmt;

/// All supported Bookshelf operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookshelfOperation {
    // Book CRUD
    /// List every book.
    ListBooks,
    /// Create a new book.
    CreateBook,
    /// Get a book by id.
    GetBook,
    /// Replace the title, author and year of a book.
    UpdateBook,
    /// Delete a book by id.
    DeleteBook,

    // URL tools
    /// Normalize a URL.
    CleanUrl,
}

impl BookshelfOperation {
    /// Returns the operation name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListBooks => "ListBooks",
            Self::CreateBook => "CreateBook",
            Self::GetBook => "GetBook",
            Self::UpdateBook => "UpdateBook",
            Self::DeleteBook => "DeleteBook",
            Self::CleanUrl => "CleanUrl",
        }
    }
}

impl fmt::Display for BookshelfOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
