//! Bookshelf HTTP service implementing the hyper `Service` trait.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;

use bookshelf_model::error::BookshelfError;

use crate::body::{BookshelfResponseBody, empty_body};
use crate::cors::CorsPolicy;
use crate::dispatch::{BookshelfHandler, dispatch_operation};
use crate::response::{REQUEST_ID_HEADER, error_to_response};
use crate::router::resolve_route;

/// Configuration for the Bookshelf HTTP service.
#[derive(Debug, Clone, Default)]
pub struct BookshelfHttpConfig {
    /// Cross-origin policy applied to every response.
    pub cors: CorsPolicy,
}

/// Hyper `Service` implementation for Bookshelf.
///
/// Wraps a [`BookshelfHandler`] implementation and routes incoming HTTP
/// requests to the appropriate operation.
#[derive(Debug)]
pub struct BookshelfHttpService<H: BookshelfHandler> {
    handler: Arc<H>,
    config: Arc<BookshelfHttpConfig>,
}

impl<H: BookshelfHandler> BookshelfHttpService<H> {
    /// Create a new `BookshelfHttpService`.
    pub fn new(handler: Arc<H>, config: BookshelfHttpConfig) -> Self {
        Self {
            handler,
            config: Arc::new(config),
        }
    }

    /// Run a request through the full pipeline.
    ///
    /// Generic over the request body so callers other than hyper (tests,
    /// in-process clients) can drive the service with buffered bodies.
    pub async fn handle<B>(&self, req: http::Request<B>) -> http::Response<BookshelfResponseBody>
    where
        B: http_body::Body<Data = Bytes>,
        B::Error: fmt::Display,
    {
        let request_id = uuid::Uuid::new_v4().to_string();
        let origin = req.headers().get(http::header::ORIGIN).cloned();

        let response = process_request(req, self.handler.as_ref(), &self.config, &request_id).await;
        add_common_headers(response, &request_id, &self.config.cors, origin.as_ref())
    }
}

impl<H: BookshelfHandler> Clone for BookshelfHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: BookshelfHandler> hyper::service::Service<http::Request<Incoming>>
    for BookshelfHttpService<H>
{
    type Response = http::Response<BookshelfResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let svc = self.clone();
        Box::pin(async move { Ok(svc.handle(req).await) })
    }
}

/// Process a single Bookshelf HTTP request.
async fn process_request<H, B>(
    req: http::Request<B>,
    handler: &H,
    config: &BookshelfHttpConfig,
    request_id: &str,
) -> http::Response<BookshelfResponseBody>
where
    H: BookshelfHandler,
    B: http_body::Body<Data = Bytes>,
    B::Error: fmt::Display,
{
    let (parts, incoming) = req.into_parts();

    // 1. CORS preflight never reaches a handler.
    if parts.method == http::Method::OPTIONS {
        return preflight_response(&parts.headers, &config.cors, request_id);
    }

    // 2. Route: method + path.
    let route = match resolve_route(&parts.method, parts.uri.path()) {
        Ok(route) => route,
        Err(err) => {
            tracing::debug!(method = %parts.method, path = parts.uri.path(), error = %err, "no route");
            return error_to_response(&err, request_id);
        }
    };

    // 3. Collect body.
    let body = match collect_body(incoming).await {
        Ok(body) => body,
        Err(err) => return error_to_response(&err, request_id),
    };

    // 4. Dispatch to handler.
    match dispatch_operation(handler, route, body, request_id).await {
        Ok(response) => response,
        Err(err) => error_to_response(&err, request_id),
    }
}

/// Answer an `OPTIONS` preflight request.
fn preflight_response(
    headers: &http::HeaderMap,
    cors: &CorsPolicy,
    request_id: &str,
) -> http::Response<BookshelfResponseBody> {
    let origin = headers.get(http::header::ORIGIN);
    let allowed = origin
        .and_then(|o| o.to_str().ok())
        .is_some_and(|o| cors.allows(o));

    let Some(origin) = origin.filter(|_| allowed) else {
        let shown = origin.and_then(|o| o.to_str().ok()).unwrap_or("<none>");
        tracing::warn!(origin = shown, "rejected CORS preflight");
        return error_to_response(&BookshelfError::origin_not_allowed(shown), request_id);
    };

    let mut response = http::Response::builder()
        .status(http::StatusCode::NO_CONTENT)
        .body(empty_body())
        .expect("valid preflight response");
    cors.apply_preflight(response.headers_mut(), origin);
    response
}

/// Collect the incoming body into a single `Bytes` buffer.
async fn collect_body<B>(incoming: B) -> Result<Bytes, BookshelfError>
where
    B: http_body::Body<Data = Bytes>,
    B::Error: fmt::Display,
{
    incoming
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .map_err(|e| BookshelfError::internal_error(format!("Failed to read request body: {e}")))
}

/// Add common response headers to every Bookshelf response.
fn add_common_headers(
    mut response: http::Response<BookshelfResponseBody>,
    request_id: &str,
    cors: &CorsPolicy,
    origin: Option<&http::HeaderValue>,
) -> http::Response<BookshelfResponseBody> {
    let headers = response.headers_mut();

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.entry(REQUEST_ID_HEADER).or_insert(hv);
    }

    headers.insert(http::header::SERVER, http::HeaderValue::from_static("Bookshelf"));

    if !headers.contains_key(http::header::ACCESS_CONTROL_ALLOW_ORIGIN) {
        cors.apply(headers, origin);
    }

    response
}
