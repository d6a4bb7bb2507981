use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// One entry of the map catalog. Field names are camelCase on the wire to
/// match the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    /// Unique key; a change of id means "different image, reset the view".
    pub id: String,
    /// Native (Chinese) display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Display label for the playable area, e.g. "8km x 8km".
    pub size: String,
    /// Resource path of the map image.
    pub image: String,
}

/// Embedded catalog document. Static configuration, not user data.
const CATALOG_JSON: &str = include_str!("maps.json");

static CATALOG: OnceLock<Vec<MapData>> = OnceLock::new();

/// The full map catalog, parsed once. The embedded document is validated by
/// tests, so a parse failure here is a build defect.
pub fn catalog() -> &'static [MapData] {
    CATALOG.get_or_init(|| serde_json::from_str(CATALOG_JSON).expect("embedded map catalog"))
}

/// Look up a map by id, falling back to the first catalog entry for unknown
/// or empty ids.
pub fn find_map(id: &str) -> &'static MapData {
    let maps = catalog();
    maps.iter().find(|m| m.id == id).unwrap_or(&maps[0])
}
