//! Debounced query dispatch.
//!
//! Every edit calls [`Debouncer::edit`], which supersedes whatever edit was
//! still waiting. The returned [`PendingQuery`] resolves after the quiet
//! period to `Some(text)` only if no newer edit arrived in the meantime and
//! the text is non-empty. Continuous typing therefore dispatches nothing
//! until it pauses.

use std::time::Duration;

use crate::sequence::{SearchSequence, SearchTicket};

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    edits: SearchSequence,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            edits: SearchSequence::new(),
        }
    }

    /// Register an edit. Any earlier pending query will resolve to `None`.
    pub fn edit(&self, text: impl Into<String>) -> PendingQuery {
        PendingQuery {
            text: text.into(),
            ticket: self.edits.begin(),
            delay: self.delay,
        }
    }

    /// Drop any pending query without registering a new edit.
    pub fn cancel(&self) {
        self.edits.invalidate();
    }
}

/// An edit waiting out the quiet period.
#[derive(Debug)]
#[must_use = "a pending query does nothing unless awaited with `settled`"]
pub struct PendingQuery {
    text: String,
    ticket: SearchTicket,
    delay: Duration,
}

impl PendingQuery {
    /// Wait out the quiet period; `Some(text)` if this edit is still the last
    /// one and is non-empty.
    pub async fn settled(self) -> Option<String> {
        sleep(self.delay).await;
        if !self.ticket.is_latest() || self.text.is_empty() {
            return None;
        }
        Some(self.text)
    }
}

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}
