//! # Client configuration — `holocron.toml`
//!
//! Everything tunable about the client lives in one TOML document. The web
//! package bundles its `holocron.toml` and parses it with
//! [`CatalogConfig::from_toml`] at startup.
//!
//! ## Structure
//!
//! ```toml
//! base_url = "https://swapi.dev/api"
//!
//! [search]
//! limit = 15                         # searches allowed per login
//! unlimited_user = "Luke Skywalker"  # exempt from the limit
//! debounce_ms = 300                  # quiet period before a query is sent
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`CatalogConfig`] | Top-level config: the catalog base URL plus the search section. |
//! | [`SearchConfig`] | Search limit, the exempt character and the debounce interval. |
//!
//! Every field has a serde default, so a missing or empty file is the default
//! configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level configuration stored in `holocron.toml`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogConfig {
    /// Root of the catalog API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search gate and debounce configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Searches a capped user may run per login.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Character name exempt from the limit.
    #[serde(default = "default_unlimited_user")]
    pub unlimited_user: String,
    /// Quiet period after the last edit before a query is dispatched.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_base_url() -> String {
    "https://swapi.dev/api".to_string()
}

fn default_limit() -> u32 {
    15
}

fn default_unlimited_user() -> String {
    "Luke Skywalker".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            unlimited_user: default_unlimited_user(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl CatalogConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = CatalogConfig::from_toml("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.base_url, "https://swapi.dev/api");
        assert_eq!(config.search.limit, 15);
        assert_eq!(config.search.unlimited_user, "Luke Skywalker");
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_search_section() {
        let config = CatalogConfig::from_toml(
            r#"
            base_url = "http://localhost:9000/api/"

            [search]
            limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.search.limit, 3);
        assert_eq!(config.search.unlimited_user, "Luke Skywalker");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(CatalogConfig::from_toml("[search]\nlimit = \"lots\"").is_err());
    }
}
