//! URL normalization operation selector.

use std::fmt;
use std::str::FromStr;

/// Which normalization steps to apply to a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlOperation {
    /// Strip the query string and one trailing slash.
    Canonical,
    /// Pin the host, lowercase scheme and path.
    Redirection,
    /// `Canonical` followed by `Redirection`.
    All,
}

impl UrlOperation {
    /// Every operation, in declaration order.
    pub const ALL_OPERATIONS: [Self; 3] = [Self::Canonical, Self::Redirection, Self::All];

    /// Returns the wire name of the operation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::Redirection => "redirection",
            Self::All => "all",
        }
    }

    /// Whether the canonical steps (query and trailing slash removal) run.
    #[must_use]
    pub fn canonicalizes(self) -> bool {
        matches!(self, Self::Canonical | Self::All)
    }

    /// Whether the redirection steps (host pinning and lowercasing) run.
    #[must_use]
    pub fn redirects(self) -> bool {
        matches!(self, Self::Redirection | Self::All)
    }
}

impl FromStr for UrlOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(Self::Canonical),
            "redirection" => Ok(Self::Redirection),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown operation {other:?}, expected one of: canonical, redirection, all"
            )),
        }
    }
}

impl fmt::Display for UrlOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
