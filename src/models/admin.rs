use serde::Deserialize;

/// Body of GET /api/admin/healthcheck.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthcheckResponse {
    pub status: String,
    pub n_stations: u64,
    pub n_tags: u64,
    pub n_passes: u64,
}

/// Body of the admin reset/upload endpoints. Success is decided by the
/// payload `status` field, not by the HTTP status alone.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminOpResponse {
    pub status: String,
    #[serde(default)]
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthcheck_counts() {
        let json = r#"{"status":"OK","n_stations":30,"n_tags":1200,"n_passes":50000}"#;
        let response: HealthcheckResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        assert_eq!(response.n_passes, 50000);
    }

    #[test]
    fn info_is_optional() {
        let ok: AdminOpResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
        assert!(ok.info.is_none());
        let failed: AdminOpResponse =
            serde_json::from_str(r#"{"status":"failed","info":"db connection lost"}"#).unwrap();
        assert_eq!(failed.info.as_deref(), Some("db connection lost"));
    }
}
