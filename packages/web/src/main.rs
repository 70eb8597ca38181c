use dioxus::prelude::*;
use store::CatalogConfig;

use views::{Login, NotFound, Search};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/search")]
    Search {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const MAIN_CSS: Asset = asset!("/assets/main.css");

const CONFIG: &str = include_str!("../holocron.toml");

fn main() {
    dioxus::launch(App);
}

/// The bundled `holocron.toml`, or the defaults if it does not parse.
fn load_config() -> CatalogConfig {
    CatalogConfig::from_toml(CONFIG).unwrap_or_else(|e| {
        tracing::error!("Falling back to the default config: {}", e);
        CatalogConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_matches_defaults() {
        assert_eq!(load_config(), CatalogConfig::default());
    }
}
