//! Bookshelf handler implementation bridging HTTP to business logic.

use std::sync::Arc;

use bytes::Bytes;

use bookshelf_core::BookId;
use bookshelf_http::body::BookshelfResponseBody;
use bookshelf_http::dispatch::{BookshelfHandler, HandlerFuture};
use bookshelf_http::response::ok_json;
use bookshelf_http::router::RouteMatch;
use bookshelf_model::error::BookshelfError;
use bookshelf_model::input::{BookInput, CleanUrlInput};
use bookshelf_model::operations::BookshelfOperation;

use crate::provider::Bookshelf;

/// Handler that bridges the HTTP layer to the Bookshelf provider.
#[derive(Debug)]
pub struct BookshelfHttpHandler {
    provider: Arc<Bookshelf>,
}

impl BookshelfHttpHandler {
    /// Create a new handler wrapping a provider.
    #[must_use]
    pub fn new(provider: Arc<Bookshelf>) -> Self {
        Self { provider }
    }
}

impl BookshelfHandler for BookshelfHttpHandler {
    fn handle_operation(&self, route: RouteMatch, body: Bytes, request_id: String) -> HandlerFuture {
        let provider = Arc::clone(&self.provider);
        Box::pin(async move { dispatch(provider.as_ref(), route, &body, &request_id).await })
    }
}

/// Dispatch a Bookshelf operation to the appropriate provider method.
async fn dispatch(
    provider: &Bookshelf,
    route: RouteMatch,
    body: &[u8],
    request_id: &str,
) -> Result<http::Response<BookshelfResponseBody>, BookshelfError> {
    match route.operation {
        BookshelfOperation::ListBooks => {
            let output = provider.handle_list_books().await?;
            ok_json(&output, request_id)
        }
        BookshelfOperation::CreateBook => {
            let input = deserialize_book(body)?;
            let output = provider.handle_create_book(input).await?;
            ok_json(&output, request_id)
        }
        BookshelfOperation::GetBook => {
            let output = provider.handle_get_book(book_id(route)?).await?;
            ok_json(&output, request_id)
        }
        BookshelfOperation::UpdateBook => {
            let id = book_id(route)?;
            // Existence is checked before the body is looked at.
            provider.handle_get_book(id).await?;
            let input = deserialize_book(body)?;
            let output = provider.handle_update_book(id, input).await?;
            ok_json(&output, request_id)
        }
        BookshelfOperation::DeleteBook => {
            let output = provider.handle_delete_book(book_id(route)?).await?;
            ok_json(&output, request_id)
        }
        BookshelfOperation::CleanUrl => {
            let input: CleanUrlInput = serde_json::from_slice(body).map_err(|e| {
                tracing::warn!(error = %e, "invalid clean-url request");
                BookshelfError::invalid_input(&e).with_source(e)
            })?;
            let output = provider.handle_clean_url(&input)?;
            ok_json(&output, request_id)
        }
    }
}

fn book_id(route: RouteMatch) -> Result<BookId, BookshelfError> {
    route.book_id.ok_or_else(BookshelfError::record_not_found)
}

/// Deserialize a book body; any decoding failure is `Invalid JSON input`.
fn deserialize_book(body: &[u8]) -> Result<BookInput, BookshelfError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "invalid book JSON");
        BookshelfError::invalid_json().with_source(e)
    })
}
