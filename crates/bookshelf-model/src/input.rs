//! Bookshelf request input types.
//!
//! Unknown JSON fields are ignored, so clients may send back a full [`Book`]
//! (including `id` and timestamps) as an update body.
//!
//! [`Book`]: crate::output::Book

use serde::{Deserialize, Serialize};

use bookshelf_url::UrlOperation;

/// Body of `POST /books` and `PUT /books/{id}`.
///
/// Missing fields decode to their empty value and are then rejected by
/// [`BookInput::is_complete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInput {
    /// Book title.
    #[serde(default)]
    pub title: String,
    /// Book author.
    #[serde(default)]
    pub author: String,
    /// Publication year; zero means "not provided".
    #[serde(default)]
    pub year: u32,
}

impl BookInput {
    /// Whether title, author and year are all present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty() && self.year != 0
    }
}

/// Body of `POST /clean-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanUrlInput {
    /// The URL to normalize.
    pub url: String,
    /// Which normalization to apply.
    pub operation: UrlOperation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_missing_book_fields() {
        let input: BookInput = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(input.title, "Dune");
        assert!(input.author.is_empty());
        assert_eq!(input.year, 0);
        assert!(!input.is_complete());
    }

    #[test]
    fn test_should_accept_complete_book_with_extra_fields() {
        let input: BookInput = serde_json::from_str(
            r#"{"id":3,"title":"Dune","author":"Frank Herbert","year":1965,"created_at":null}"#,
        )
        .unwrap();
        assert!(input.is_complete());
    }

    #[test]
    fn test_should_reject_negative_year() {
        assert!(serde_json::from_str::<BookInput>(r#"{"title":"a","author":"b","year":-1}"#).is_err());
    }

    #[test]
    fn test_should_require_both_clean_url_fields() {
        assert!(serde_json::from_str::<CleanUrlInput>(r#"{"url":"https://byfood.com"}"#).is_err());
        assert!(serde_json::from_str::<CleanUrlInput>(r#"{"operation":"all"}"#).is_err());
        assert!(
            serde_json::from_str::<CleanUrlInput>(
                r#"{"url":"https://byfood.com","operation":""}"#
            )
            .is_err()
        );

        let input: CleanUrlInput =
            serde_json::from_str(r#"{"url":"https://byfood.com","operation":"all"}"#).unwrap();
        assert_eq!(input.operation, UrlOperation::All);
    }
}
