//! CORS origin matching and response header generation.
//!
//! Browsers send an `Origin` header on cross-origin requests. Allowed origins
//! get `Access-Control-Allow-Origin` echoed back on every response, and
//! `OPTIONS` preflight requests are answered here without reaching a handler.

/// Methods advertised in preflight responses.
pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE";

/// Request headers advertised in preflight responses.
pub const ALLOWED_HEADERS: &str = "Origin, Content-Type";

/// How long (in seconds) browsers may cache a preflight result.
pub const MAX_AGE_SECONDS: &str = "43200";

/// Origin allow-list.
///
/// # Examples
///
/// ```
/// use bookshelf_http::cors::CorsPolicy;
///
/// let policy = CorsPolicy::new(["http://localhost:3000"]);
/// assert!(policy.allows("http://localhost:3000"));
/// assert!(!policy.allows("https://evil.example"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allow_any: bool,
}

impl CorsPolicy {
    /// Build a policy from a list of origins. `*` allows any origin.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed_origins: Vec<String> = origins.into_iter().map(Into::into).collect();
        let allow_any = allowed_origins.iter().any(|o| o == "*");
        Self {
            allowed_origins,
            allow_any,
        }
    }

    /// Whether `origin` may make cross-origin requests.
    #[must_use]
    pub fn allows(&self, origin: &str) -> bool {
        self.allow_any
            || self
                .allowed_origins
                .iter()
                .any(|o| o.eq_ignore_ascii_case(origin))
    }

    /// Add `Access-Control-Allow-Origin` for an allowed `origin`.
    ///
    /// Does nothing when the origin is absent or not allowed; the browser
    /// then refuses to expose the response.
    pub fn apply(&self, headers: &mut http::HeaderMap, origin: Option<&http::HeaderValue>) {
        let Some(origin) = origin else {
            return;
        };
        let allowed = origin.to_str().is_ok_and(|o| self.allows(o));
        if !allowed {
            return;
        }

        headers.insert(http::header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.append(http::header::VARY, http::HeaderValue::from_static("Origin"));
    }

    /// Headers for a successful preflight response.
    pub fn apply_preflight(&self, headers: &mut http::HeaderMap, origin: &http::HeaderValue) {
        self.apply(headers, Some(origin));
        headers.insert(
            http::header::ACCESS_CONTROL_ALLOW_METHODS,
            http::HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            http::header::ACCESS_CONTROL_ALLOW_HEADERS,
            http::HeaderValue::from_static(ALLOWED_HEADERS),
        );
        headers.insert(
            http::header::ACCESS_CONTROL_MAX_AGE,
            http::HeaderValue::from_static(MAX_AGE_SECONDS),
        );
    }
}
