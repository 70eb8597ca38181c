use dioxus::prelude::*;

/// "Search Balance" panel shown to capped users.
#[component]
pub fn SearchBalance(remaining: u32) -> Element {
    rsx! {
        div {
            class: "bg-black/30 backdrop-blur-sm px-6 py-3 rounded-lg border border-yellow-500/20",
            div { class: "text-sm text-gray-400 mb-1", "Search Balance" }
            div {
                class: "flex items-center gap-2",
                div { class: "text-2xl font-bold text-yellow-400", "{remaining}" }
                div { class: "text-sm text-gray-400", "remaining" }
            }
        }
    }
}
