//! Bookshelf HTTP service layer.
//!
//! This crate implements the JSON-over-HTTP transport, providing:
//!
//! - **Router**: Maps method + path to a [`BookshelfOperation`](bookshelf_model::BookshelfOperation)
//! - **Handler trait**: Defines the boundary between HTTP and business logic
//! - **Service**: Hyper `Service` implementation
//! - **CORS**: Origin allow-list and preflight handling
//! - **Response helpers**: JSON success/error response formatting
#![allow(missing_docs)]

pub mod body;
pub mod cors;
pub mod dispatch;
pub mod response;
pub mod router;
pub mod service;

pub use body::BookshelfResponseBody;
pub use cors::CorsPolicy;
pub use dispatch::BookshelfHandler;
pub use router::RouteMatch;
pub use service::{BookshelfHttpConfig, BookshelfHttpService};
