//! Bookshelf handler trait and operation dispatch.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use bookshelf_model::error::BookshelfError;

use crate::body::BookshelfResponseBody;
use crate::router::RouteMatch;

/// Boxed future returned by [`BookshelfHandler::handle_operation`].
pub type HandlerFuture = Pin<
    Box<dyn Future<Output = Result<http::Response<BookshelfResponseBody>, BookshelfError>> + Send>,
>;

/// Trait that the Bookshelf business logic provider must implement.
///
/// The handler receives a resolved route, the raw JSON body bytes and the
/// request id, and returns a complete HTTP response. This trait is the
/// boundary between the HTTP transport layer and the business logic layer.
pub trait BookshelfHandler: Send + Sync + 'static {
    /// Handle a Bookshelf operation and produce an HTTP response.
    fn handle_operation(&self, route: RouteMatch, body: Bytes, request_id: String)
    -> HandlerFuture;
}

/// Dispatch a Bookshelf operation to the handler.
pub async fn dispatch_operation<H: BookshelfHandler>(
    handler: &H,
    route: RouteMatch,
    body: Bytes,
    request_id: &str,
) -> Result<http::Response<BookshelfResponseBody>, BookshelfError> {
    tracing::debug!(
        operation = %route.operation,
        book_id = ?route.book_id.map(bookshelf_core::BookId::get),
        request_id,
        "dispatching Bookshelf operation"
    );
    handler
        .handle_operation(route, body, request_id.to_owned())
        .await
}
