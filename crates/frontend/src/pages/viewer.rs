use dioxus::prelude::*;
use pubg_maps_shared::models;

use crate::components::map_info::MapInfo;
use crate::components::map_tabs::MapTabs;
use crate::components::map_view::MapView;

/// Page shell: map tabs on top, info panel and the pan/zoom viewer below.
/// `map_id` comes from the route; unknown ids fall back to the first map.
#[component]
pub fn Viewer(map_id: Option<String>) -> Element {
    let initial = map_id.unwrap_or_default();
    let mut selected_map_id = use_signal(move || models::find_map(&initial).id.clone());

    let map = models::find_map(&selected_map_id.read()).clone();

    rsx! {
        div { class: "app",
            MapTabs {
                selected_map_id: map.id.clone(),
                on_map_change: move |id: String| selected_map_id.set(id),
            }

            MapInfo { map: map.clone() }

            MapView { map_id: selected_map_id }
        }
    }
}
