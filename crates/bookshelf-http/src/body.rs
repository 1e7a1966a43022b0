//! Response body used by every Bookshelf response.
//!
//! Responses are small JSON documents, or nothing at all for CORS
//! preflights, so the body is always fully buffered.

use bytes::Bytes;
use http_body_util::Full;

/// Buffered body of a Bookshelf response.
pub type BookshelfResponseBody = Full<Bytes>;

/// Body holding an already serialized JSON document.
#[must_use]
pub fn json_body(json: Vec<u8>) -> BookshelfResponseBody {
    Full::new(Bytes::from(json))
}

/// Body of a preflight response.
#[must_use]
pub fn empty_body() -> BookshelfResponseBody {
    Full::new(Bytes::new())
}
