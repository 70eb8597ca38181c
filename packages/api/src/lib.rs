//! # API crate — HTTP access to the Star Wars catalog
//!
//! The only remote collaborator Holocron has is a public, read-only search
//! API. This crate adapts it to [`store::CatalogClient`]:
//!
//! | Endpoint | Used by |
//! |----------|---------|
//! | `GET {base}/people/?search={name}` | [`store::auth`] to find login candidates |
//! | `GET {base}/planets/?search={query}` | [`store::SearchGate::search`] to run a planet search |
//!
//! Both respond with a `{ "results": [...] }` envelope. Non-2xx statuses,
//! network failures and undecodable bodies each map to a
//! [`store::CatalogError`] variant; an error is never reported as an empty
//! result list.

pub mod swapi;

pub use swapi::SwapiClient;
