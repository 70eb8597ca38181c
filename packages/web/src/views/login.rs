//! Login page for the web build.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// `/` — sign in, then go to the search screen.
///
/// A visitor who is already signed in still sees the form and may sign in
/// again, which resets their search allowance.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_signed_in: move |_| {
                nav.push(Route::Search {});
            },
        }
    }
}
