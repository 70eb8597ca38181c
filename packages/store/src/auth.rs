//! Credential check against the character catalog.
//!
//! The "password" is the character's public birth year. This is a toy gate,
//! not a security boundary.

use crate::catalog::CatalogClient;
use crate::error::AuthError;
use crate::models::CharacterRecord;

/// Look `name` up and return the record whose name and birth year both match
/// exactly.
///
/// The catalog search is a substring match, so every returned record is
/// checked locally. The name is sent as typed, even when empty. The caller
/// signs the session in with the returned record; on error it leaves the
/// session alone.
pub async fn verify_credentials<C: CatalogClient>(
    catalog: &C,
    name: &str,
    birth_year: &str,
) -> Result<CharacterRecord, AuthError> {
    let candidates = catalog.search_characters(name).await.map_err(|e| {
        tracing::error!("Character lookup failed: {}", e);
        AuthError::from(e)
    })?;

    candidates
        .into_iter()
        .find(|c| c.matches(name, birth_year))
        .ok_or_else(|| {
            tracing::warn!("Rejected credentials for {:?}", name);
            AuthError::Rejected
        })
}
