// ============================================================================
// LEAFLET FFI - Foreign Function Interface for the Leaflet glue JS
// ============================================================================
// Only wrappers over window-level functions - no state, no logic
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Create the Leaflet map inside the given container with an
    /// OpenStreetMap tile layer. A no-op when the map already exists, so
    /// re-renders keep the user's pan/zoom.
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(container_id: &str, center_lat: f64, center_lng: f64, zoom: f64);

    /// Replace all station markers. Takes a JSON array of
    /// `{lat, lng, owned, popupHtml}` objects; owned stations get the
    /// owned-toll icon, external ones the external icon, and popups open
    /// on hover.
    #[wasm_bindgen(js_name = setStationMarkers)]
    pub fn set_station_markers(stations_json: &str);
}
