//! Session context and hooks for the UI.

use std::time::Duration;

use api::SwapiClient;
use dioxus::prelude::*;
use store::{CatalogConfig, SearchGate, Session};

use crate::Icon;
use crate::icons::FaArrowRightFromBracket;

/// Shared, read-only services every view needs.
#[derive(Clone, Debug)]
pub struct CatalogContext {
    pub client: SwapiClient,
    pub gate: SearchGate,
    pub debounce: Duration,
}

impl CatalogContext {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: SwapiClient::new(config),
            gate: SearchGate::new(&config.search),
            debounce: config.search.debounce(),
        }
    }
}

/// Get the current session.
/// Returns a signal that updates when the user logs in, logs out or searches.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the catalog client, search gate and debounce interval.
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>()
}

/// Provider component that owns the session for the whole app.
/// Wrap your router with this component.
#[component]
pub fn SessionProvider(
    #[props(default)] config: CatalogConfig,
    children: Element,
) -> Element {
    use_context_provider(|| CatalogContext::new(&config));
    use_context_provider(|| Signal::new(Session::new()));

    rsx! {
        {children}
    }
}

/// Button that ends the session and hands control back to the caller.
#[component]
pub fn LogoutButton(
    on_sign_out: EventHandler<()>,
    #[props(default = "Return to Base".to_string())] label: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        on_sign_out.call(());
    };

    rsx! {
        button {
            class: "px-6 py-3 bg-red-600/80 backdrop-blur-sm rounded-lg hover:bg-red-700/80 transition-all flex items-center space-x-2 group border border-red-500/20",
            onclick: onclick,
            span { "{label}" }
            Icon {
                class: "transform group-hover:translate-x-1 transition-transform",
                icon: FaArrowRightFromBracket,
                width: 20,
                height: 20,
            }
        }
    }
}
