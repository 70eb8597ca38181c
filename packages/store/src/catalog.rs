use crate::error::CatalogError;
use crate::models::{CharacterRecord, PlanetRecord};

/// Async read-only access to the remote catalog.
///
/// Both lookups are substring searches on the remote side. Implementations
/// must report failures as [`CatalogError`], never as an empty result list.
pub trait CatalogClient {
    fn search_characters(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<CharacterRecord>, CatalogError>>;
    fn search_planets(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<PlanetRecord>, CatalogError>>;
}
