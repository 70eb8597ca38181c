//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod session;
pub use session::{use_catalog, use_session, CatalogContext, LogoutButton, SessionProvider};

mod planet_card;
pub use planet_card::{tier_class, PlanetCard, PlanetDetail};

mod search_balance;
pub use search_balance::SearchBalance;
