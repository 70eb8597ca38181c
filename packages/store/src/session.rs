//! # Session — who is signed in and how many searches they have used
//!
//! A [`Session`] is a plain value owned by whoever drives the UI. It has
//! three mutation entry points and nothing else may change it:
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`login`](Session::login) | Signs in as the given character and resets the search count to 0. |
//! | [`logout`](Session::logout) | Back to the initial signed-out state. |
//! | [`record_search`](Session::record_search) | Counts one completed search. No-op when signed out. |
//!
//! "Authenticated" is not stored separately: a session is authenticated iff
//! it holds a user, so the two can never disagree.

use crate::models::CharacterRecord;

/// In-memory authentication state plus per-login search usage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<CharacterRecord>,
    search_count: u32,
}

impl Session {
    /// A signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&CharacterRecord> {
        self.user.as_ref()
    }

    /// Searches performed since the last login. Always 0 when signed out.
    pub fn search_count(&self) -> u32 {
        self.search_count
    }

    pub fn login(&mut self, user: CharacterRecord) {
        tracing::info!("Signed in as {}", user.name);
        self.user = Some(user);
        self.search_count = 0;
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.name);
        }
        self.search_count = 0;
    }

    /// Count one completed search and return the new total.
    pub fn record_search(&mut self) -> u32 {
        if self.user.is_some() {
            self.search_count = self.search_count.saturating_add(1);
        }
        self.search_count
    }
}
