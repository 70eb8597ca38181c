//! # Search gate — the per-login rate limit
//!
//! A capped user may run [`SearchConfig::limit`] searches per login; the
//! character named by [`SearchConfig::unlimited_user`] is never capped. The
//! counter only resets on login, so despite the "per minute" wording the
//! limit is per session.
//!
//! A search is split in two so the session never has to be borrowed mutably
//! across an await (the UI keeps it in a signal):
//!
//! | Step | Borrow | Effect |
//! |------|--------|--------|
//! | [`SearchGate::search`] | `&Session` | Admits, takes a [`SearchTicket`] and calls the catalog. |
//! | [`CompletedSearch::commit`] | `&mut Session`, `&mut SearchResults` | Counts the search and applies the results if the ticket is still the newest. |
//!
//! A denied or failed search never reaches the commit, so the count and the
//! displayed results stay as they were.

use crate::catalog::CatalogClient;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::models::PlanetRecord;
use crate::results::SearchResults;
use crate::sequence::{SearchSequence, SearchTicket};
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchGate {
    limit: u32,
    unlimited_user: String,
}

impl Default for SearchGate {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl SearchGate {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            limit: config.limit,
            unlimited_user: config.unlimited_user.clone(),
        }
    }

    /// Whether the signed-in character bypasses the limit.
    pub fn is_unlimited(&self, session: &Session) -> bool {
        session
            .user()
            .is_some_and(|user| user.name == self.unlimited_user)
    }

    /// Decide whether one more search may go out.
    pub fn admit(&self, session: &Session) -> Result<(), SearchError> {
        if !session.is_authenticated() {
            return Err(SearchError::NotAuthenticated);
        }
        if self.is_unlimited(session) || session.search_count() < self.limit {
            return Ok(());
        }
        tracing::warn!(
            "Search limit of {} reached ({} used)",
            self.limit,
            session.search_count()
        );
        Err(SearchError::RateLimited)
    }

    /// Searches left to show the user, clamped at 0.
    ///
    /// `None` when the user is unlimited or nobody is signed in.
    pub fn remaining(&self, session: &Session) -> Option<u32> {
        if !session.is_authenticated() || self.is_unlimited(session) {
            return None;
        }
        Some(self.limit.saturating_sub(session.search_count()))
    }

    /// Admit against `session`, then forward `query` to the catalog under a
    /// fresh ticket from `sequence`.
    ///
    /// `query` is expected to be non-empty; the [`crate::Debouncer`] never
    /// hands out an empty one. Nothing is sent when the gate refuses.
    pub async fn search<C: CatalogClient>(
        &self,
        catalog: &C,
        session: &Session,
        sequence: &SearchSequence,
        query: &str,
    ) -> Result<CompletedSearch, SearchError> {
        self.admit(session)?;
        let ticket = sequence.begin();
        let planets = catalog.search_planets(query).await.map_err(|e| {
            tracing::error!("Planet search for {:?} failed: {}", query, e);
            SearchError::from(e)
        })?;
        Ok(CompletedSearch {
            ticket,
            query: query.to_string(),
            planets,
        })
    }
}

/// A catalog answer that has not been counted or shown yet.
#[derive(Debug)]
#[must_use = "a completed search does nothing until it is committed"]
pub struct CompletedSearch {
    ticket: SearchTicket,
    query: String,
    planets: Vec<PlanetRecord>,
}

impl CompletedSearch {
    /// Count the search against `session` and hand the planets to `results`.
    ///
    /// The count goes up even when a newer search has superseded this one,
    /// since the remote call was made. Returns whether the results were
    /// applied.
    pub fn commit(self, session: &mut Session, results: &mut SearchResults) -> bool {
        session.record_search();
        results.apply(&self.ticket, &self.query, self.planets)
    }
}
