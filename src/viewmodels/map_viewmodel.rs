// ============================================================================
// MAP VIEWMODEL - Pass-summary loading and marker construction
// ============================================================================

use serde::Serialize;

use crate::models::{StationView, TollStationEntry};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;
use crate::utils::format::euro;
use crate::viewmodels::debts_viewmodel::{resolve_operator, validate_dates};

pub const NO_MAP_DATA_MSG: &str = "No data available for the selected filters.";

/// Marker payload handed to the Leaflet glue as JSON.
#[derive(Debug, Serialize)]
pub struct StationMarker {
    pub lat: f64,
    pub lng: f64,
    pub owned: bool,
    #[serde(rename = "popupHtml")]
    pub popup_html: String,
}

/// Build the per-request station views. `is_owned` compares against the
/// operator the summary was queried for.
pub fn stations_from_entries(entries: &[TollStationEntry], operator: &str) -> Vec<StationView> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| StationView {
            id: index,
            name: entry.station_name.clone(),
            lat: entry.lat,
            lng: entry.lng,
            is_owned: entry.station_operator == operator,
            prices: [entry.price1, entry.price2, entry.price3, entry.price4],
            pass_count: entry.n_passes,
            total_charge: entry.total_pass_charge,
            operator_id: entry.station_operator.clone(),
        })
        .collect()
}

/// Popup detail HTML. Stations run by the logged-in user show their own
/// pass count; for every other station the count is passes made with the
/// user's tags.
pub fn popup_html(station: &StationView, username: &str) -> String {
    let passes_line = if station.operator_id == username {
        format!("Passes: {}", station.pass_count)
    } else {
        format!("Passes by {} tags: {}", username, station.pass_count)
    };
    format!(
        "<strong>{}</strong><br/>Operator: {}<br/>🛵: {}<br/>🚗: {}<br/>🚐: {}<br/>🚚: {}<br/>{}<br/>Total Charges: {}<br/>",
        station.name,
        station.operator_id,
        euro(station.prices[0]),
        euro(station.prices[1]),
        euro(station.prices[2]),
        euro(station.prices[3]),
        passes_line,
        euro(station.total_charge),
    )
}

/// JSON array for `setStationMarkers`. Icon choice follows the username
/// match, like the popup wording.
pub fn markers_json(stations: &[StationView], username: &str) -> String {
    let markers: Vec<StationMarker> = stations
        .iter()
        .map(|station| StationMarker {
            lat: station.lat,
            lng: station.lng,
            owned: station.operator_id == username,
            popup_html: popup_html(station, username),
        })
        .collect();
    serde_json::to_string(&markers).unwrap_or_else(|_| "[]".to_string())
}

pub struct MapViewModel {
    api_client: ApiClient,
    state: AppState,
}

impl MapViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api_client: ApiClient::new(),
            state,
        }
    }

    /// Validate filters, fetch the summary, and replace the station list.
    pub async fn load(&self) {
        let map = &self.state.map;
        match self.try_load().await {
            Ok(Some(count)) => {
                log::info!("✅ Loaded {} stations", count);
                *map.error.borrow_mut() = None;
            }
            Ok(None) => {
                map.stations.borrow_mut().clear();
                *map.error.borrow_mut() = Some(NO_MAP_DATA_MSG.to_string());
            }
            Err(e) => {
                log::error!("❌ Error loading pass summary: {}", e);
                *map.error.borrow_mut() = Some(e.to_string());
            }
        }
    }

    async fn try_load(&self) -> Result<Option<usize>, ApiError> {
        let map = &self.state.map;
        let (date_from, date_to) = validate_dates(
            &map.from_date.borrow(),
            &map.to_date.borrow(),
            "From Date",
            "To Date",
        )?;

        let record = self.state.session.snapshot();
        let operator = resolve_operator(&record, &map.operator_input.borrow())?;
        let token = record.token().ok_or(ApiError::MissingToken)?.to_string();

        let response = self
            .api_client
            .operator_pass_summary(&token, &operator, &date_from, &date_to)
            .await?;

        match response.toll_stations {
            Some(entries) => {
                let stations = stations_from_entries(&entries, &operator);
                let count = stations.len();
                *map.stations.borrow_mut() = stations;
                Ok(Some(count))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, operator: &str) -> TollStationEntry {
        TollStationEntry {
            station_name: name.into(),
            lat: 38.0,
            lng: 23.7,
            station_operator: operator.into(),
            price1: 1.25,
            price2: 2.5,
            price3: 5.0,
            price4: 7.0,
            n_passes: 42,
            total_pass_charge: 105.0,
        }
    }

    #[test]
    fn ownership_follows_queried_operator() {
        let entries = vec![entry("AM01", "AM"), entry("NO02", "NO")];
        let stations = stations_from_entries(&entries, "AM");
        assert!(stations[0].is_owned);
        assert!(!stations[1].is_owned);
        assert_eq!(stations[0].id, 0);
        assert_eq!(stations[1].id, 1);
    }

    #[test]
    fn popup_distinguishes_own_stations() {
        let stations = stations_from_entries(&[entry("AM01", "AM")], "AM");
        let own = popup_html(&stations[0], "AM");
        assert!(own.contains("Passes: 42"));
        assert!(own.contains("🛵: €1.25"));
        assert!(own.contains("Total Charges: €105.00"));

        let other = popup_html(&stations[0], "NO");
        assert!(other.contains("Passes by NO tags: 42"));
    }

    #[test]
    fn markers_serialize_for_the_leaflet_glue() {
        let stations = stations_from_entries(&[entry("AM01", "AM")], "AM");
        let json = markers_json(&stations, "AM");
        assert!(json.contains("\"owned\":true"));
        assert!(json.contains("\"popupHtml\""));
        assert!(json.contains("\"lat\":38.0"));
    }
}
