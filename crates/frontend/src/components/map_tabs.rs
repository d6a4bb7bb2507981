use dioxus::prelude::*;
use pubg_maps_shared::models;

/// Tab strip listing every catalog map. Selection is owned by the page; tab
/// clicks report the chosen map id upward.
#[component]
pub fn MapTabs(selected_map_id: String, on_map_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "map-tabs",
            div { class: "map-tabs__title",
                span { class: "map-tabs__title-icon", "🗺️" }
                "PUBG Map Viewer"
            }

            nav { class: "map-tabs__nav", "aria-label": "Map selection",
                ul { class: "map-tabs__list",
                    for m in models::catalog() {
                        li { class: "map-tabs__item", key: "{m.id}",
                            button {
                                class: if m.id == selected_map_id {
                                    "map-tabs__tab map-tabs__tab--active"
                                } else {
                                    "map-tabs__tab"
                                },
                                "aria-pressed": if m.id == selected_map_id { "true" } else { "false" },
                                onclick: move |_| on_map_change.call(m.id.clone()),
                                span { class: "map-tabs__tab-name", "{m.name}" }
                                span { class: "map-tabs__tab-name-en", "{m.name_en}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
