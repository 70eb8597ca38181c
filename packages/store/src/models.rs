//! # Catalog records
//!
//! The two record shapes the remote catalog returns. Both are decoded straight
//! from the catalog's JSON; any field not listed here is ignored.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`CharacterRecord`] | A character looked up by name at login. The `(name, birth_year)` pair is its identity and the birth year doubles as the login password. |
//! | [`PlanetRecord`] | A planet returned by a search. Display only, plus the population that drives [`crate::SizeTier`]. |

use serde::{Deserialize, Serialize};

/// A character as returned by the people search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub birth_year: String,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, birth_year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_year: birth_year.into(),
        }
    }

    /// Exact, case-sensitive match on both name and birth year.
    pub fn matches(&self, name: &str, birth_year: &str) -> bool {
        self.name == name && self.birth_year == birth_year
    }
}

/// A planet as returned by the planet search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub name: String,
    /// Decimal digits, or the literal `"unknown"`.
    pub population: String,
    pub climate: String,
    pub terrain: String,
    pub rotation_period: String,
}

impl PlanetRecord {
    pub fn size_tier(&self) -> crate::SizeTier {
        crate::SizeTier::from_population(&self.population)
    }
}

/// The `{ "results": [...] }` envelope both search endpoints respond with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub results: Vec<T>,
}
