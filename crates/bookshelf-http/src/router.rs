//! Bookshelf request router.
//!
//! Routes are resolved from the method and the path alone:
//!
//! ```text
//! GET    /books         ListBooks
//! POST   /books         CreateBook
//! GET    /books/{id}    GetBook
//! PUT    /books/{id}    UpdateBook
//! DELETE /books/{id}    DeleteBook
//! POST   /clean-url     CleanUrl   (also /clean_url)
//! ```
//!
//! A single trailing slash on the request path is ignored.

use bookshelf_core::BookId;
use bookshelf_model::error::BookshelfError;
use bookshelf_model::operations::BookshelfOperation;

/// A resolved route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    /// The operation to run.
    pub operation: BookshelfOperation,
    /// The addressed book, for operations under `/books/{id}`.
    pub book_id: Option<BookId>,
}

impl RouteMatch {
    fn collection(operation: BookshelfOperation) -> Self {
        Self {
            operation,
            book_id: None,
        }
    }
}

/// Resolve a Bookshelf operation from the request method and path.
///
/// An id that is not a positive integer resolves to `404 Record not found`,
/// the same answer as an id that does not exist.
pub fn resolve_route(method: &http::Method, path: &str) -> Result<RouteMatch, BookshelfError> {
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match segments.as_slice() {
        ["books"] => match *method {
            http::Method::GET => Ok(RouteMatch::collection(BookshelfOperation::ListBooks)),
            http::Method::POST => Ok(RouteMatch::collection(BookshelfOperation::CreateBook)),
            _ => Err(BookshelfError::method_not_allowed()),
        },
        ["books", raw_id] => {
            let operation = match *method {
                http::Method::GET => BookshelfOperation::GetBook,
                http::Method::PUT => BookshelfOperation::UpdateBook,
                http::Method::DELETE => BookshelfOperation::DeleteBook,
                _ => return Err(BookshelfError::method_not_allowed()),
            };
            let book_id = raw_id
                .parse::<BookId>()
                .map_err(|_| BookshelfError::record_not_found())?;
            Ok(RouteMatch {
                operation,
                book_id: Some(book_id),
            })
        }
        ["clean-url" | "clean_url"] => match *method {
            http::Method::POST => Ok(RouteMatch::collection(BookshelfOperation::CleanUrl)),
            _ => Err(BookshelfError::method_not_allowed()),
        },
        _ => Err(BookshelfError::route_not_found()),
    }
}
