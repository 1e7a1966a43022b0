//! Bookshelf error types.
//!
//! Every error is rendered on the wire as `{"error": "<message>"}` with the
//! status code carried by the error.

use std::fmt;

/// Well-known Bookshelf error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum BookshelfErrorCode {
    /// Request body could not be decoded.
    InvalidJson,
    /// Request decoded but failed validation.
    #[default]
    ValidationError,
    /// Book or route not found.
    NotFound,
    /// Route exists but not for this method.
    MethodNotAllowed,
    /// CORS origin rejected.
    Forbidden,
    /// Store or serialization failure.
    InternalError,
}

impl BookshelfErrorCode {
    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "InvalidJson",
            Self::ValidationError => "ValidationError",
            Self::NotFound => "NotFound",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::Forbidden => "Forbidden",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidJson | Self::ValidationError => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::Forbidden => http::StatusCode::FORBIDDEN,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for BookshelfErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Bookshelf error response.
#[derive(Debug)]
pub struct BookshelfError {
    /// The error code.
    pub code: BookshelfErrorCode,
    /// The message sent to the client.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any. Logged, never sent to the client.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for BookshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookshelfError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for BookshelfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl BookshelfError {
    /// Create a new `BookshelfError` with a custom message.
    #[must_use]
    pub fn with_message(code: BookshelfErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Book request body is not valid JSON.
    #[must_use]
    pub fn invalid_json() -> Self {
        Self::with_message(BookshelfErrorCode::InvalidJson, "Invalid JSON input")
    }

    /// Clean-url request body or URL rejected.
    #[must_use]
    pub fn invalid_input(detail: impl fmt::Display) -> Self {
        Self::with_message(
            BookshelfErrorCode::ValidationError,
            format!("Invalid input: {detail}"),
        )
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(BookshelfErrorCode::ValidationError, message)
    }

    /// Missing title, author or year.
    #[must_use]
    pub fn missing_book_fields() -> Self {
        Self::validation("Title, Author, and Year are required")
    }

    /// No book with the requested id.
    #[must_use]
    pub fn record_not_found() -> Self {
        Self::with_message(BookshelfErrorCode::NotFound, "Record not found")
    }

    /// No route for the requested path.
    #[must_use]
    pub fn route_not_found() -> Self {
        Self::with_message(BookshelfErrorCode::NotFound, "Not found")
    }

    /// The path exists but does not accept this method.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::with_message(BookshelfErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// The request origin is not allowed by CORS.
    #[must_use]
    pub fn origin_not_allowed(origin: &str) -> Self {
        Self::with_message(
            BookshelfErrorCode::Forbidden,
            format!("Origin not allowed: {origin}"),
        )
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(BookshelfErrorCode::InternalError, message)
    }
}
