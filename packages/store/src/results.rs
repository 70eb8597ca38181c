use crate::models::PlanetRecord;
use crate::sequence::SearchTicket;

/// The planet result set currently on screen and the query that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    planets: Vec<PlanetRecord>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn planets(&self) -> &[PlanetRecord] {
        &self.planets
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Replace the result set if `ticket` is still the newest dispatched
    /// search. Returns whether the results were applied.
    pub fn apply(&mut self, ticket: &SearchTicket, query: &str, planets: Vec<PlanetRecord>) -> bool {
        if !ticket.is_latest() {
            tracing::debug!("Dropping stale results for {:?} (ticket {})", query, ticket.id());
            return false;
        }
        self.query = query.to_string();
        self.planets = planets;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::fixtures::planet;
    use crate::sequence::SearchSequence;

    #[test]
    fn test_apply_replaces_results() {
        let sequence = SearchSequence::new();
        let mut results = SearchResults::new();

        let ticket = sequence.begin();
        assert!(results.apply(&ticket, "hoth", vec![planet("Hoth", "unknown")]));
        assert_eq!(results.query(), "hoth");
        assert_eq!(results.planets().len(), 1);

        let ticket = sequence.begin();
        assert!(results.apply(&ticket, "xyz", Vec::new()));
        assert!(results.is_empty());
        assert_eq!(results.query(), "xyz");
    }

    #[test]
    fn test_late_response_is_dropped() {
        let sequence = SearchSequence::new();
        let mut results = SearchResults::new();

        let slow = sequence.begin();
        let fast = sequence.begin();

        // The newer query answers first
        assert!(results.apply(&fast, "tat", vec![planet("Tatooine", "200000")]));
        // The older one arrives later and must not overwrite it
        assert!(!results.apply(&slow, "t", vec![planet("Alderaan", "2000000000")]));

        assert_eq!(results.query(), "tat");
        assert_eq!(results.planets()[0].name, "Tatooine");
    }
}
