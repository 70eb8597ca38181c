//! Error types for catalog access, login and search.

use thiserror::Error;

/// A failed call to the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connection, CORS...).
    #[error("catalog request failed: {0}")]
    Transport(String),
    /// The catalog answered with a non-2xx status.
    #[error("catalog responded with HTTP {0}")]
    Status(u16),
    /// The body was not the expected `{ "results": [...] }` shape.
    #[error("malformed catalog response: {0}")]
    Decode(String),
}

/// Why a login attempt did not establish a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials. Please check your Character Name and Birth Year.")]
    Rejected,
    #[error("Failed to authenticate. Please try again.")]
    Unavailable(#[from] CatalogError),
}

/// Why a search did not replace the displayed results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("You must sign in before searching.")]
    NotAuthenticated,
    #[error("Search limit reached!")]
    RateLimited,
    #[error("Search failed. Please try again.")]
    Unavailable(#[from] CatalogError),
}

/// A `holocron.toml` that could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
