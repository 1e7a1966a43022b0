//! Gateway service in front of the Bookshelf HTTP service.
//!
//! Health-check endpoints (`/health`, `/_health`) are intercepted here and
//! never reach the router. Everything else is forwarded unchanged.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use hyper::body::Incoming;
use hyper::service::Service;

use bookshelf_http::body::{BookshelfResponseBody, json_body};
use bookshelf_http::dispatch::BookshelfHandler;
use bookshelf_http::service::BookshelfHttpService;

/// Gateway wrapping the Bookshelf service with health-check interception.
#[derive(Debug)]
pub struct GatewayService<H: BookshelfHandler> {
    bookshelf: BookshelfHttpService<H>,
    version: &'static str,
}

impl<H: BookshelfHandler> GatewayService<H> {
    /// Create a new gateway reporting `version` on health checks.
    pub fn new(bookshelf: BookshelfHttpService<H>, version: &'static str) -> Self {
        Self { bookshelf, version }
    }
}

impl<H: BookshelfHandler> Clone for GatewayService<H> {
    fn clone(&self) -> Self {
        Self {
            bookshelf: self.bookshelf.clone(),
            version: self.version,
        }
    }
}

impl<H: BookshelfHandler> Service<http::Request<Incoming>> for GatewayService<H> {
    type Response = http::Response<BookshelfResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        if is_health_check(req.method(), req.uri().path()) {
            let resp = health_check_response(self.version);
            return Box::pin(async { Ok(resp) });
        }

        let bookshelf = self.bookshelf.clone();
        Box::pin(async move { Ok(bookshelf.handle(req).await) })
    }
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/health" || path == "/_health")
}

/// Produce the health check response.
fn health_check_response(version: &str) -> http::Response<BookshelfResponseBody> {
    let body = serde_json::json!({ "status": "running", "version": version }).to_string();
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(json_body(body.into_bytes()))
        .expect("static health response should be valid")
}
