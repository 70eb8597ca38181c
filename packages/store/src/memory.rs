use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::models::{CharacterRecord, PlanetRecord};

/// In-memory CatalogClient for testing and offline demos.
///
/// Searches are case-insensitive substring matches, like the remote catalog.
/// Clones share the same records and call counters.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    characters: Arc<Mutex<Vec<CharacterRecord>>>,
    planets: Arc<Mutex<Vec<PlanetRecord>>>,
    failure: Arc<Mutex<Option<CatalogError>>>,
    character_calls: Arc<AtomicUsize>,
    planet_calls: Arc<AtomicUsize>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character(self, record: CharacterRecord) -> Self {
        self.characters.lock().unwrap().push(record);
        self
    }

    pub fn with_planet(self, record: PlanetRecord) -> Self {
        self.planets.lock().unwrap().push(record);
        self
    }

    /// Make every subsequent call fail with `error` until cleared with `None`.
    pub fn set_failure(&self, error: Option<CatalogError>) {
        *self.failure.lock().unwrap() = error;
    }

    pub fn character_calls(&self) -> usize {
        self.character_calls.load(Ordering::SeqCst)
    }

    pub fn planet_calls(&self) -> usize {
        self.planet_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), CatalogError> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl CatalogClient for MemoryCatalog {
    async fn search_characters(&self, name: &str) -> Result<Vec<CharacterRecord>, CatalogError> {
        self.character_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self
            .characters
            .lock()
            .unwrap()
            .iter()
            .filter(|c| contains_ignore_case(&c.name, name))
            .cloned()
            .collect())
    }

    async fn search_planets(&self, query: &str) -> Result<Vec<PlanetRecord>, CatalogError> {
        self.planet_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self
            .planets
            .lock()
            .unwrap()
            .iter()
            .filter(|p| contains_ignore_case(&p.name, query))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn planet(name: &str, population: &str) -> PlanetRecord {
        PlanetRecord {
            name: name.to_string(),
            population: population.to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
            rotation_period: "23".to_string(),
        }
    }

    pub fn galaxy() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_character(CharacterRecord::new("Luke Skywalker", "19BBY"))
            .with_character(CharacterRecord::new("Leia Organa", "19BBY"))
            .with_character(CharacterRecord::new("Darth Vader", "41.9BBY"))
            .with_planet(planet("Tatooine", "200000"))
            .with_planet(planet("Alderaan", "2000000000"))
            .with_planet(planet("Hoth", "unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[tokio::test]
    async fn test_substring_search_is_case_insensitive() {
        let catalog = galaxy();

        let found = catalog.search_characters("sky").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Luke Skywalker");

        let planets = catalog.search_planets("A").await.unwrap();
        assert_eq!(planets.len(), 2);
        assert_eq!(catalog.planet_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_matches_everything() {
        let catalog = galaxy();
        assert_eq!(catalog.search_characters("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_failure_is_reported_not_empty() {
        let catalog = galaxy();
        catalog.set_failure(Some(CatalogError::Status(503)));

        assert_eq!(
            catalog.search_planets("Hoth").await,
            Err(CatalogError::Status(503))
        );
        assert_eq!(catalog.planet_calls(), 1);

        catalog.set_failure(None);
        assert_eq!(catalog.search_planets("Hoth").await.unwrap().len(), 1);
    }
}
