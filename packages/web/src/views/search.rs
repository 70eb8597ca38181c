//! Search page for the web build.

use dioxus::prelude::*;
use ui::use_session;
use ui::views::SearchView;

use crate::Route;

/// `/search` — only reachable with a signed-in session.
#[component]
pub fn Search() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Redirect to login when nobody is signed in
    if !session.read().is_authenticated() {
        tracing::info!("Search requested without a session, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        SearchView {
            on_sign_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
