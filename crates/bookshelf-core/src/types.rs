//! Common type definitions shared across crates.

use std::fmt;
use std::str::FromStr;

/// Primary key of a stored book.
///
/// Ids are assigned by the store and are always positive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Create a new book id.
    ///
    /// # Errors
    /// Returns an error if the id is zero or negative.
    pub fn new(id: i64) -> Result<Self, crate::BookshelfCoreError> {
        if id <= 0 {
            return Err(crate::BookshelfCoreError::InvalidBookId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw id value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for BookId {
    type Err = crate::BookshelfCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only plain decimal digits; `+1` and ` 1` are not ids.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(crate::BookshelfCoreError::InvalidBookId(s.to_owned()));
        }
        let id: i64 = s
            .parse()
            .map_err(|_| crate::BookshelfCoreError::InvalidBookId(s.to_owned()))?;
        Self::new(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
