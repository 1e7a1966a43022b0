//! Bookshelf provider implementing every operation.

use bookshelf_core::BookId;
use bookshelf_model::error::BookshelfError;
use bookshelf_model::input::{BookInput, CleanUrlInput};
use bookshelf_model::output::{Book, CleanUrlOutput, DeleteBookOutput};
use bookshelf_url::UrlNormalizer;

use crate::storage::{BookStore, StoreError};

/// Bookshelf business logic: book CRUD over a [`BookStore`] and URL cleaning.
#[derive(Debug, Clone)]
pub struct Bookshelf {
    store: BookStore,
    normalizer: UrlNormalizer,
}

impl Bookshelf {
    /// Create a provider over `store`, pinning redirected URLs with `normalizer`.
    #[must_use]
    pub fn new(store: BookStore, normalizer: UrlNormalizer) -> Self {
        Self { store, normalizer }
    }

    // -----------------------------------------------------------------------
    // Books
    // -----------------------------------------------------------------------

    /// Handle `ListBooks`.
    pub async fn handle_list_books(&self) -> Result<Vec<Book>, BookshelfError> {
        let books = self.store.list().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list books");
            BookshelfError::internal_error("Failed to retrieve books").with_source(e)
        })?;

        tracing::info!(count = books.len(), "listed books");
        Ok(books)
    }

    /// Handle `CreateBook`.
    pub async fn handle_create_book(&self, input: BookInput) -> Result<Book, BookshelfError> {
        require_complete(&input)?;

        let book = self.store.insert(&input).await.map_err(|e| {
            tracing::error!(error = %e, "failed to create book");
            BookshelfError::internal_error("Failed to create book").with_source(e)
        })?;

        tracing::info!(book_id = %book.id, "created book");
        Ok(book)
    }

    /// Handle `GetBook`.
    ///
    /// Any lookup failure, not only a missing row, answers `Record not found`.
    pub async fn handle_get_book(&self, id: BookId) -> Result<Book, BookshelfError> {
        let book = self.store.get(id).await.map_err(|e| lookup_error(id, e))?;
        tracing::info!(book_id = %id, "found book");
        Ok(book)
    }

    /// Handle `UpdateBook`.
    ///
    /// The caller is expected to have resolved the book with
    /// [`Self::handle_get_book`] before decoding the body.
    pub async fn handle_update_book(
        &self,
        id: BookId,
        input: BookInput,
    ) -> Result<Book, BookshelfError> {
        require_complete(&input)?;

        let book = self
            .store
            .update(id, &input)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => lookup_error(id, e),
                e => {
                    tracing::error!(book_id = %id, error = %e, "failed to update book");
                    BookshelfError::internal_error("Failed to update book").with_source(e)
                }
            })?;

        tracing::info!(book_id = %id, "updated book");
        Ok(book)
    }

    /// Handle `DeleteBook`.
    pub async fn handle_delete_book(&self, id: BookId) -> Result<DeleteBookOutput, BookshelfError> {
        self.store.get(id).await.map_err(|e| lookup_error(id, e))?;

        self.store.delete(id).await.map_err(|e| match e {
            StoreError::NotFound(_) => lookup_error(id, e),
            e => {
                tracing::error!(book_id = %id, error = %e, "failed to delete book");
                BookshelfError::internal_error("Failed to delete book").with_source(e)
            }
        })?;

        tracing::info!(book_id = %id, "deleted book");
        Ok(DeleteBookOutput::default())
    }

    // -----------------------------------------------------------------------
    // URL cleaning
    // -----------------------------------------------------------------------

    /// Handle `CleanUrl`.
    pub fn handle_clean_url(&self, input: &CleanUrlInput) -> Result<CleanUrlOutput, BookshelfError> {
        let processed_url = self
            .normalizer
            .normalize(&input.url, input.operation)
            .map_err(|e| {
                tracing::warn!(operation = %input.operation, error = %e, "rejected URL");
                BookshelfError::invalid_input(&e).with_source(e)
            })?;

        tracing::info!(operation = %input.operation, "cleaned URL");
        Ok(CleanUrlOutput { processed_url })
    }
}

fn require_complete(input: &BookInput) -> Result<(), BookshelfError> {
    if input.is_complete() {
        Ok(())
    } else {
        tracing::warn!("book is missing title, author or year");
        Err(BookshelfError::missing_book_fields())
    }
}

fn lookup_error(id: BookId, e: StoreError) -> BookshelfError {
    if e.is_not_found() {
        tracing::warn!(book_id = %id, "book not found");
    } else {
        tracing::error!(book_id = %id, error = %e, "failed to look up book");
    }
    BookshelfError::record_not_found().with_source(e)
}
