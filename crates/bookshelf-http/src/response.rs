//! Bookshelf response serialization and error formatting.

use bookshelf_model::error::BookshelfError;

use crate::body::{BookshelfResponseBody, json_body};

/// Content type for every JSON response.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Serialize a Bookshelf error into a JSON response body.
///
/// ```json
/// { "error": "Record not found" }
/// ```
#[must_use]
pub fn error_to_json(error: &BookshelfError) -> Vec<u8> {
    serde_json::to_vec(&serde_json::json!({ "error": error.message }))
        .expect("JSON serialization of error cannot fail")
}

/// Convert a `BookshelfError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &BookshelfError,
    request_id: &str,
) -> http::Response<BookshelfResponseBody> {
    json_response(error.status_code, error_to_json(error), request_id)
}

/// Build a JSON response with the given status.
#[must_use]
pub fn json_response(
    status: http::StatusCode,
    json: Vec<u8>,
    request_id: &str,
) -> http::Response<BookshelfResponseBody> {
    let mut response = http::Response::builder()
        .status(status)
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .body(json_body(json))
        .expect("valid JSON response");

    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, hv);
    }

    response
}

/// Serialize `output` and wrap it in a `200 OK` JSON response.
pub fn ok_json<T: serde::Serialize>(
    output: &T,
    request_id: &str,
) -> Result<http::Response<BookshelfResponseBody>, BookshelfError> {
    let json = serde_json::to_vec(output).map_err(|e| {
        BookshelfError::internal_error("Failed to serialize response").with_source(e)
    })?;
    Ok(json_response(http::StatusCode::OK, json, request_id))
}

#[cfg(test)]
mod tests {
    use http_body::Body;

    use super::*;

    #[test]
    fn test_should_format_error_json() {
        let err = BookshelfError::record_not_found();
        let json = error_to_json(&err);
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed, serde_json::json!({ "error": "Record not found" }));
    }

    #[test]
    fn test_should_build_error_response_with_correct_status() {
        let err = BookshelfError::missing_book_fields();
        let resp = error_to_response(&err, "test-req-123");
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers().get(http::header::CONTENT_TYPE).unwrap(),
            CONTENT_TYPE
        );
        assert_eq!(
            resp.headers().get(REQUEST_ID_HEADER).unwrap(),
            "test-req-123"
        );
    }

    #[test]
    fn test_should_build_ok_json_response() {
        let resp = ok_json(&serde_json::json!({"processed_url": "https://x.test"}), "req-456")
            .unwrap();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(resp.body().size_hint().exact(), Some(34));
    }
}
