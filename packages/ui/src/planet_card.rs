use dioxus::prelude::*;
use store::{PlanetRecord, SizeTier};

/// Text-size class for a planet name.
pub fn tier_class(tier: SizeTier) -> &'static str {
    match tier {
        SizeTier::Small => "text-base",
        SizeTier::Medium => "text-xl",
        SizeTier::Large => "text-2xl",
        SizeTier::Huge => "text-3xl",
        SizeTier::Colossal => "text-4xl",
    }
}

/// One planet in the results grid. The name grows with the population.
#[component]
pub fn PlanetCard(planet: PlanetRecord, on_select: EventHandler<PlanetRecord>) -> Element {
    let tier = planet.size_tier();
    let size = tier_class(tier);
    let rank = tier.rank();
    let selected = planet.clone();

    rsx! {
        div {
            class: "cursor-pointer p-8 bg-black/30 backdrop-blur-sm rounded-2xl border border-yellow-500/20 hover:border-yellow-500/40 transition-all transform hover:-translate-y-2 hover:scale-105 hover:shadow-lg hover:shadow-yellow-500/10 group relative overflow-hidden",
            "data-tier": "{rank}",
            onclick: move |_| on_select.call(selected.clone()),

            h3 {
                class: "font-starwars {size} text-yellow-400 mb-4 group-hover:animate-glow",
                "{planet.name}"
            }
            div {
                class: "space-y-2 text-gray-400",
                PlanetFact { label: "Climate", value: planet.climate.clone() }
                PlanetFact { label: "Terrain", value: planet.terrain.clone() }
                PlanetFact { label: "Population", value: planet.population.clone() }
            }
        }
    }
}

#[component]
fn PlanetFact(label: &'static str, value: String) -> Element {
    rsx! {
        p {
            class: "flex items-center gap-2",
            span { class: "w-2 h-2 rounded-full bg-yellow-500/50" }
            "{label}: {value}"
        }
    }
}

/// Full details for the planet picked from the grid.
#[component]
pub fn PlanetDetail(planet: PlanetRecord) -> Element {
    rsx! {
        div {
            class: "p-12",
            h2 {
                class: "text-5xl font-starwars text-yellow-400 mb-8 text-center animate-glow",
                "{planet.name}"
            }
            div {
                class: "grid grid-cols-2 gap-8 text-lg",
                div {
                    class: "space-y-4",
                    DetailField { label: "Climate", value: planet.climate.clone() }
                    DetailField { label: "Terrain", value: planet.terrain.clone() }
                }
                div {
                    class: "space-y-4",
                    DetailField { label: "Population", value: planet.population.clone() }
                    DetailField { label: "Rotation Period", value: planet.rotation_period.clone() }
                }
            }
        }
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            label { class: "text-gray-400 text-sm", "{label}" }
            p { class: "text-white text-xl", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_classes_grow_with_population() {
        assert_eq!(tier_class(SizeTier::from_population("unknown")), "text-base");
        assert_eq!(tier_class(SizeTier::from_population("1000000")), "text-base");
        assert_eq!(tier_class(SizeTier::from_population("4500000")), "text-xl");
        assert_eq!(tier_class(SizeTier::from_population("30000000")), "text-2xl");
        assert_eq!(tier_class(SizeTier::from_population("200000000")), "text-3xl");
        assert_eq!(tier_class(SizeTier::from_population("1000000001")), "text-4xl");
    }
}
