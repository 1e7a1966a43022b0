//! Configuration management for Bookshelf.
//!
//! All configuration is driven by environment variables.

use crate::BookshelfCoreError;

/// Global configuration for the Bookshelf server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookshelfConfig {
    /// Bind address for the HTTP listener.
    pub gateway_listen: String,
    /// sqlx connection URL for the book store.
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub database_max_connections: u32,
    /// Host that the `redirection` URL operation pins every URL to.
    pub canonical_domain: String,
    /// Origins allowed by CORS. `*` allows any origin.
    pub cors_allow_origins: Vec<String>,
    /// Log level.
    pub log_level: String,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            gateway_listen: "0.0.0.0:8080".to_owned(),
            database_url: "sqlite://bookshelf.db?mode=rwc".to_owned(),
            database_max_connections: 5,
            canonical_domain: bookshelf_url::DEFAULT_CANONICAL_DOMAIN.to_owned(),
            cors_allow_origins: vec!["http://localhost:3000".to_owned()],
            log_level: "info".to_owned(),
        }
    }
}

impl BookshelfConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, BookshelfCoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their default value.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BookshelfCoreError> {
        let mut config = Self::default();

        if let Some(v) = lookup("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Some(v) = lookup("DATABASE_URL") {
            config.database_url = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.database_max_connections = v.trim().parse().map_err(|_| {
                BookshelfCoreError::Config(format!("DATABASE_MAX_CONNECTIONS is not a number: {v}"))
            })?;
            if config.database_max_connections == 0 {
                return Err(BookshelfCoreError::Config(
                    "DATABASE_MAX_CONNECTIONS must be at least 1".to_owned(),
                ));
            }
        }
        if let Some(v) = lookup("CANONICAL_DOMAIN") {
            let v = v.trim();
            if v.is_empty() {
                return Err(BookshelfCoreError::Config(
                    "CANONICAL_DOMAIN must not be empty".to_owned(),
                ));
            }
            config.canonical_domain = v.to_owned();
        }
        if let Some(v) = lookup("CORS_ALLOW_ORIGINS") {
            config.cors_allow_origins = parse_origins(&v);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}

/// Split a comma-separated origin list, dropping blanks and trailing slashes.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = BookshelfConfig::default();
        assert_eq!(config.gateway_listen, "0.0.0.0:8080");
        assert_eq!(config.canonical_domain, bookshelf_url::DEFAULT_CANONICAL_DOMAIN);
        assert_eq!(config.cors_allow_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn test_should_keep_defaults_when_nothing_is_set() {
        let config = BookshelfConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, BookshelfConfig::default());
    }

    #[test]
    fn test_should_override_from_lookup() {
        let config = BookshelfConfig::from_lookup(lookup_from(&[
            ("GATEWAY_LISTEN", "127.0.0.1:9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("CANONICAL_DOMAIN", "www.example.org"),
            ("CORS_ALLOW_ORIGINS", "http://a.test/, ,http://b.test"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.gateway_listen, "127.0.0.1:9000");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 2);
        assert_eq!(config.canonical_domain, "www.example.org");
        assert_eq!(config.cors_allow_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_reject_bad_max_connections() {
        let err = BookshelfConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "lots")]))
            .unwrap_err();
        assert!(matches!(err, BookshelfCoreError::Config(_)));

        let err = BookshelfConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(matches!(err, BookshelfCoreError::Config(_)));
    }

    #[test]
    fn test_should_reject_blank_canonical_domain() {
        let err =
            BookshelfConfig::from_lookup(lookup_from(&[("CANONICAL_DOMAIN", "  ")])).unwrap_err();
        assert!(matches!(err, BookshelfCoreError::Config(_)));
    }
}
