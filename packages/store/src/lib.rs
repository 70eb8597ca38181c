//! # Store crate — session state and search rules for Holocron
//!
//! Everything here is plain Rust with no UI dependency, so the rules the
//! client enforces can be tested without a browser.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Character and planet records as the catalog returns them |
//! | [`catalog`] | The [`CatalogClient`] trait the HTTP adapter implements |
//! | [`session`] | Signed-in user and search count |
//! | [`auth`] | Exact name + birth year credential check |
//! | [`gate`] | Per-login search limit |
//! | [`debounce`] | Quiet-period dispatch of query edits |
//! | [`sequence`] / [`results`] | Only the newest search may replace the results |
//! | [`tier`] | Population size tiers |
//! | [`config`] | `holocron.toml` |

pub mod auth;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod gate;
pub mod models;
pub mod results;
pub mod sequence;
pub mod session;
pub mod tier;

mod memory;
pub use memory::MemoryCatalog;

pub use catalog::CatalogClient;
pub use config::{CatalogConfig, SearchConfig};
pub use debounce::{Debouncer, PendingQuery};
pub use error::{AuthError, CatalogError, ConfigError, SearchError};
pub use gate::{CompletedSearch, SearchGate};
pub use models::{CharacterRecord, PlanetRecord, SearchPage};
pub use results::SearchResults;
pub use sequence::{SearchSequence, SearchTicket};
pub use session::Session;
pub use tier::SizeTier;
