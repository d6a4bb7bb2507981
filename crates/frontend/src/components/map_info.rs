use dioxus::prelude::*;
use pubg_maps_shared::models::MapData;

/// Detail panel for the currently selected map.
#[component]
pub fn MapInfo(map: MapData) -> Element {
    rsx! {
        div { class: "map-info",
            div { class: "map-info__header",
                h2 { class: "map-info__title", "{map.name}" }
                span { class: "map-info__title-en", "{map.name_en}" }
            }

            div { class: "map-info__details",
                div { class: "map-info__detail-item",
                    span { class: "map-info__detail-label", "Map size" }
                    span { class: "map-info__detail-value", "{map.size}" }
                }
            }
        }
    }
}
