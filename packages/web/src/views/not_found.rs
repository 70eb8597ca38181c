use dioxus::prelude::*;

use crate::Route;

/// Any unknown path goes back to the login screen.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}, redirecting", segments.join("/"));
    nav.replace(Route::Login {});
    rsx! {}
}
