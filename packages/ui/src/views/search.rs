use dioxus::prelude::*;
use store::{Debouncer, PlanetRecord, SearchError, SearchResults, SearchSequence, Session};

use crate::Icon;
use crate::icons::FaMagnifyingGlass;
use crate::session::CatalogContext;
use crate::views::ModalOverlay;
use crate::{use_catalog, use_session, LogoutButton, PlanetCard, PlanetDetail, SearchBalance};

/// Shared planet search view.
///
/// Query edits are debounced; a settled, non-empty query goes through the
/// search gate and, if admitted, to the catalog. Only the newest dispatched
/// search may replace the grid. Signing out drops the pending edit and any
/// search still in flight. The platform package guards the route and
/// provides the navigation after sign-out.
#[component]
pub fn SearchView(on_sign_out: EventHandler<()>) -> Element {
    let session = use_session();
    let catalog = use_catalog();
    let debouncer = use_hook(|| Debouncer::new(catalog.debounce));
    let sequence = use_hook(SearchSequence::new);
    let mut query = use_signal(String::new);
    let results = use_signal(SearchResults::new);
    let mut selected = use_signal(|| Option::<PlanetRecord>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let remaining = catalog.gate.remaining(&session.read());
    let user_name = session
        .read()
        .user()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let planets = results.read().planets().to_vec();
    let last_query = results.read().query().to_string();
    let nothing_found = results.read().is_empty() && !last_query.is_empty();

    let pending_edits = debouncer.clone();
    let in_flight = sequence.clone();
    let sign_out = move |_: ()| {
        pending_edits.cancel();
        in_flight.invalidate();
        on_sign_out.call(());
    };

    let on_input = move |evt: FormEvent| {
        let text = evt.value();
        query.set(text.clone());

        let pending = debouncer.edit(text);
        let catalog = catalog.clone();
        let sequence = sequence.clone();
        spawn(async move {
            if let Some(settled) = pending.settled().await {
                run_search(catalog, sequence, session, results, notice, settled).await;
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen w-full bg-[#0B0B0F] text-white relative overflow-hidden",

            div { class: "absolute inset-0 bg-stars animate-twinkle" }

            div {
                class: "relative z-10 p-8 min-h-screen",
                div {
                    class: "max-w-7xl mx-auto",

                    div {
                        class: "flex justify-between items-center mb-12",
                        div {
                            h1 {
                                class: "text-5xl font-starwars text-yellow-400 mb-2 tracking-wider animate-glow",
                                "Galactic Database"
                            }
                            p { class: "text-gray-400 text-xl", "Welcome, {user_name}" }
                        }
                        div {
                            class: "flex items-center gap-8",
                            if let Some(remaining) = remaining {
                                SearchBalance { remaining }
                            }
                            LogoutButton { on_sign_out: sign_out }
                        }
                    }

                    div {
                        class: "relative mb-16 group",
                        input {
                            r#type: "text",
                            class: "w-full p-8 bg-black/50 backdrop-blur-xl rounded-2xl border border-yellow-500/20 text-yellow-300 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-yellow-500/50 transition-all text-xl",
                            placeholder: "Search planets in the galaxy...",
                            value: query(),
                            oninput: on_input,
                        }
                        div {
                            class: "absolute right-8 top-1/2 -translate-y-1/2 animate-pulse text-yellow-500/50",
                            Icon { icon: FaMagnifyingGlass, width: 32, height: 32 }
                        }
                    }

                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                        for planet in planets {
                            PlanetCard {
                                key: "{planet.name}",
                                planet: planet.clone(),
                                on_select: move |picked| selected.set(Some(picked)),
                            }
                        }
                    }

                    if nothing_found {
                        p {
                            class: "text-center text-gray-400 text-xl",
                            "No planets found for \"{last_query}\""
                        }
                    }
                }
            }

            if let Some(planet) = selected() {
                ModalOverlay {
                    on_close: move |_| selected.set(None),
                    PlanetDetail { planet }
                }
            }

            if let Some(message) = notice() {
                ModalOverlay {
                    on_close: move |_| notice.set(None),
                    div {
                        class: "p-12 text-center",
                        h2 { class: "text-3xl font-starwars text-yellow-400 mb-4", "{message}" }
                        p {
                            class: "text-gray-400",
                            "Your search allowance for this session is used up. Sign in again to reset it."
                        }
                    }
                }
            }
        }
    }
}

/// Gate, dispatch and commit one settled query.
///
/// A refused or failed search leaves the grid and the count untouched; only
/// the limit is surfaced to the user.
async fn run_search(
    catalog: CatalogContext,
    sequence: SearchSequence,
    mut session: Signal<Session>,
    mut results: Signal<SearchResults>,
    mut notice: Signal<Option<String>>,
    query: String,
) {
    let snapshot = session();
    let outcome = catalog
        .gate
        .search(&catalog.client, &snapshot, &sequence, &query)
        .await;

    match outcome {
        Ok(completed) => {
            completed.commit(&mut session.write(), &mut results.write());
        }
        Err(SearchError::RateLimited) => notice.set(Some(SearchError::RateLimited.to_string())),
        Err(e) => tracing::warn!("Search for {:?} did not complete: {}", query, e),
    }
}
