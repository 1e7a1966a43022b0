//! URL normalization errors.

/// Errors produced while normalizing a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// The input is not an absolute URL with a scheme and a host.
    #[error("malformed URL {url:?}: {reason}")]
    MalformedUrl {
        /// The rejected input.
        url: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// The configured canonical domain is not a valid host.
    #[error("invalid canonical domain {domain:?}: {reason}")]
    InvalidDomain {
        /// The rejected domain.
        domain: String,
        /// Why the domain was rejected.
        reason: String,
    },
}

impl NormalizeError {
    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        Self::MalformedUrl {
            url: url.to_owned(),
            reason: reason.into(),
        }
    }
}
