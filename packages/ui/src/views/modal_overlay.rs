use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaXmark;

/// A full-screen overlay that centers its children in a dark card with a
/// close button. Clicking outside the card also triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/90 backdrop-blur-xl flex items-center justify-center p-4",
            style: "z-index: 50",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-black/90 rounded-3xl max-w-2xl w-full border border-yellow-500/20 transform animate-scale-up relative",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "absolute top-4 right-4 text-gray-500 hover:text-white transition-colors",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 24, height: 24 }
                }
                {children}
            }
        }
    }
}
