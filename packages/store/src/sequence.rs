use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter that hands out [`SearchTicket`]s.
///
/// Only the most recently issued ticket is "latest". Clones share the counter.
#[derive(Clone, Debug, Default)]
pub struct SearchSequence {
    latest: Arc<AtomicU64>,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn begin(&self) -> SearchTicket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        SearchTicket {
            id,
            latest: self.latest.clone(),
        }
    }

    /// Supersede all outstanding tickets without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Handle for one dispatched search (or one pending edit).
#[derive(Clone, Debug)]
pub struct SearchTicket {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl SearchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether no newer ticket has been issued since this one.
    pub fn is_latest(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_latest() {
        let sequence = SearchSequence::new();
        let first = sequence.begin();
        assert!(first.is_latest());

        let second = sequence.begin();
        assert!(!first.is_latest());
        assert!(second.is_latest());
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_invalidate_supersedes_everything() {
        let sequence = SearchSequence::new();
        let ticket = sequence.clone().begin();
        sequence.invalidate();
        assert!(!ticket.is_latest());
        assert!(sequence.begin().is_latest());
    }
}
