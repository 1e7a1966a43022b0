//! Canonical and redirection URL normalization.
//!
//! Every input is first validated with the WHATWG parser from the `url`
//! crate. What happens next depends on the operation:
//!
//! ```text
//! canonical:   input as written -> drop query, strip one trailing '/'
//! redirection: parsed URL -> pin host, clear port, lowercase decoded path
//! all:         parsed URL -> drop query, strip one trailing '/', then redirection
//! ```
//!
//! `canonical` alone works on the input text so that host case, explicit
//! ports and dot segments survive untouched. Once the host is pinned the
//! parser's serialization is used instead. There the path is carried
//! separately from the parsed [`Url`] so that stripping the last `/` of
//! `https://host/` really yields `https://host`.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, percent_encode};
use url::{Host, Position, Url};

use crate::error::NormalizeError;
use crate::operation::UrlOperation;

/// Host used by [`normalize`] and [`UrlNormalizer::default`].
pub const DEFAULT_CANONICAL_DOMAIN: &str = "www.byfood.com";

/// Bytes re-encoded after a path has been decoded and lowercased.
///
/// The WHATWG path percent-encode set plus `%` itself; non-ASCII bytes are
/// always encoded.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Normalize `raw` with the default canonical domain.
///
/// # Examples
///
/// ```
/// use bookshelf_url::{UrlOperation, normalize};
///
/// assert_eq!(
///     normalize("https://byfood.com/path/with/query?ref=123/", UrlOperation::Canonical).unwrap(),
///     "https://byfood.com/path/with/query",
/// );
/// assert!(normalize("invalid-url", UrlOperation::Canonical).is_err());
/// ```
pub fn normalize(raw: &str, operation: UrlOperation) -> Result<String, NormalizeError> {
    UrlNormalizer::default().normalize(raw, operation)
}

/// URL normalizer bound to a canonical domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlNormalizer {
    domain: String,
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        Self {
            domain: DEFAULT_CANONICAL_DOMAIN.to_owned(),
        }
    }
}

impl UrlNormalizer {
    /// Create a normalizer that pins hosts to `domain`.
    ///
    /// The domain is validated and converted to its ASCII, lowercase form.
    /// It must be a bare host: no scheme, port, or path.
    pub fn new(domain: &str) -> Result<Self, NormalizeError> {
        let invalid = |reason: String| NormalizeError::InvalidDomain {
            domain: domain.to_owned(),
            reason,
        };

        if domain.is_empty() {
            return Err(invalid("domain is empty".to_owned()));
        }
        let host = Host::parse(domain).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            domain: host.to_string(),
        })
    }

    /// The host every redirected URL is pinned to.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Normalize `raw` according to `operation`.
    pub fn normalize(&self, raw: &str, operation: UrlOperation) -> Result<String, NormalizeError> {
        let url = parse_absolute(raw)?;

        if operation.redirects() {
            self.redirect(url, raw, operation.canonicalizes())
        } else {
            Ok(canonicalize_as_written(raw))
        }
    }

    fn redirect(&self, mut url: Url, raw: &str, canonical: bool) -> Result<String, NormalizeError> {
        let mut path = url.path().to_owned();

        if canonical {
            url.set_query(None);
            strip_one_slash(&mut path);
        }

        url.set_host(Some(&self.domain))
            .map_err(|e| NormalizeError::malformed(raw, format!("cannot replace host: {e}")))?;
        // The pinned host replaces the whole authority host, port included.
        if url.port().is_some() {
            url.set_port(None)
                .map_err(|()| NormalizeError::malformed(raw, "cannot clear port"))?;
        }

        // The parser already lowercases the scheme.
        Ok(serialize(&url, &lowercase_path(&path)))
    }
}

/// Parse `raw` and require an absolute URL that has a host.
fn parse_absolute(raw: &str) -> Result<Url, NormalizeError> {
    let url = Url::parse(raw).map_err(|e| NormalizeError::malformed(raw, e.to_string()))?;

    if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
        return Err(NormalizeError::malformed(raw, "URL has no host"));
    }

    Ok(url)
}

/// Exactly one slash: `a//` becomes `a/`.
fn strip_one_slash(path: &mut String) {
    if path.ends_with('/') {
        path.pop();
    }
}

/// Drop the query and one trailing `/` from an already validated URL,
/// leaving everything else as written.
fn canonicalize_as_written(raw: &str) -> String {
    // Same leading/trailing trim the parser applies.
    let raw = raw.trim_matches(|c: char| c.is_ascii_control() || c == ' ');

    let (head, fragment) = match raw.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (raw, None),
    };
    let mut base = head.split_once('?').map_or(head, |(base, _)| base).to_owned();
    // The authority never contains `/`, so a trailing one belongs to the path.
    strip_one_slash(&mut base);

    match fragment {
        Some(fragment) => format!("{base}#{fragment}"),
        None => base,
    }
}

/// Lowercase the decoded form of a percent-encoded path, then re-encode it.
fn lowercase_path(path: &str) -> String {
    let decoded: Vec<u8> = percent_decode_str(path).collect();
    let lowered = match std::str::from_utf8(&decoded) {
        Ok(text) => text.to_lowercase().into_bytes(),
        Err(_) => decoded.to_ascii_lowercase(),
    };
    percent_encode(&lowered, PATH_ENCODE_SET).to_string()
}

/// Reassemble `scheme://[userinfo@]host[:port]` + `path` + `[?query][#fragment]`.
fn serialize(url: &Url, path: &str) -> String {
    format!(
        "{}{}{}",
        &url[..Position::BeforePath],
        path,
        &url[Position::AfterPath..]
    )
}
