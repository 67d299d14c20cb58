use serde::Deserialize;

/// One toll station entry from GET /api/operatorPassSummary.
#[derive(Debug, Clone, Deserialize)]
pub struct TollStationEntry {
    #[serde(rename = "stationName")]
    pub station_name: String,
    pub lat: f64,
    #[serde(rename = "long")]
    pub lng: f64,
    #[serde(rename = "stationOperator")]
    pub station_operator: String,
    #[serde(rename = "Price1")]
    pub price1: f64,
    #[serde(rename = "Price2")]
    pub price2: f64,
    #[serde(rename = "Price3")]
    pub price3: f64,
    #[serde(rename = "Price4")]
    pub price4: f64,
    #[serde(rename = "nPasses")]
    pub n_passes: u64,
    #[serde(rename = "totalPassCharge")]
    pub total_pass_charge: f64,
}

/// Response of GET /api/operatorPassSummary/{op}/{from}/{to}.
/// A missing `tollStations` field means "no data for these filters",
/// which is not a transport error.
#[derive(Debug, Clone, Deserialize)]
pub struct PassSummaryResponse {
    #[serde(rename = "tollStations", default)]
    pub toll_stations: Option<Vec<TollStationEntry>>,
}

/// Station as displayed on the map. Built per-request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StationView {
    pub id: usize,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub is_owned: bool,
    pub prices: [f64; 4],
    pub pass_count: u64,
    pub total_charge: f64,
    pub operator_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_field_names() {
        let json = r#"{
            "tollStations": [{
                "stationName": "AM01",
                "lat": 40.1,
                "long": 22.5,
                "stationOperator": "AM",
                "Price1": 1.25,
                "Price2": 2.5,
                "Price3": 5.0,
                "Price4": 7.0,
                "nPasses": 42,
                "totalPassCharge": 105.0
            }]
        }"#;
        let response: PassSummaryResponse = serde_json::from_str(json).unwrap();
        let stations = response.toll_stations.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station_name, "AM01");
        assert_eq!(stations[0].lng, 22.5);
        assert_eq!(stations[0].n_passes, 42);
    }

    #[test]
    fn missing_station_list_is_no_data() {
        let response: PassSummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.toll_stations.is_none());
    }
}
