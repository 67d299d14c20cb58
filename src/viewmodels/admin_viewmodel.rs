// ============================================================================
// ADMIN VIEWMODEL - Health check, data resets, bulk pass upload
// ============================================================================
// Transport success is not enough for the reset/upload endpoints: the
// payload status field decides, and a non-"OK" health status is surfaced
// as a failure even on a 200.
// ============================================================================

use web_sys::File;

use crate::models::{AdminOpResponse, HealthcheckResponse};
use crate::services::{ApiClient, ApiError};
use crate::state::AppState;

pub const STATIONS_RESET_MSG: &str = "Stations reset successful.";
pub const PASSES_RESET_MSG: &str = "Passes reset successful.";
pub const PASSES_ADDED_MSG: &str = "Passes added successfully!";
pub const NO_FILE_MSG: &str = "Please select a CSV file to upload.";
pub const UNEXPECTED_RESPONSE_MSG: &str = "Unexpected response from the server.";

/// Human-readable health line. Only `status == "OK"` counts as healthy.
pub fn health_summary(response: &HealthcheckResponse) -> String {
    if response.status == "OK" {
        format!(
            "Healthy: Stations - {}, Tags - {}, Passes - {}",
            response.n_stations, response.n_tags, response.n_passes
        )
    } else {
        "Health check failed: Database issue detected.".to_string()
    }
}

/// Feedback for the reset/upload endpoints, decided by the payload status.
pub fn op_feedback(response: &AdminOpResponse, success_msg: &str) -> String {
    match response.status.as_str() {
        "OK" => success_msg.to_string(),
        "failed" => match &response.info {
            Some(info) => format!("Error: {}", info),
            None => UNEXPECTED_RESPONSE_MSG.to_string(),
        },
        _ => UNEXPECTED_RESPONSE_MSG.to_string(),
    }
}

pub struct AdminViewModel {
    api_client: ApiClient,
    state: AppState,
}

impl AdminViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api_client: ApiClient::new(),
            state,
        }
    }

    fn token(&self) -> Result<String, ApiError> {
        self.state.session.token().ok_or(ApiError::MissingToken)
    }

    pub async fn check_health(&self) {
        let status = match self.token() {
            Ok(token) => match self.api_client.healthcheck(&token).await {
                Ok(response) => health_summary(&response),
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };
        *self.state.admin.health_status.borrow_mut() = status;
    }

    pub async fn reset_stations(&self) {
        let feedback = self.run_reset("resetstations", STATIONS_RESET_MSG).await;
        *self.state.admin.reset_feedback.borrow_mut() = feedback;
    }

    pub async fn reset_passes(&self) {
        let feedback = self.run_reset("resetpasses", PASSES_RESET_MSG).await;
        *self.state.admin.reset_feedback.borrow_mut() = feedback;
    }

    async fn run_reset(&self, endpoint: &str, success_msg: &str) -> String {
        let token = match self.token() {
            Ok(token) => token,
            Err(e) => return e.to_string(),
        };
        let result = match endpoint {
            "resetstations" => self.api_client.reset_stations(&token).await,
            _ => self.api_client.reset_passes(&token).await,
        };
        match result {
            Ok(response) => op_feedback(&response, success_msg),
            Err(e) => e.to_string(),
        }
    }

    /// Upload the selected CSV. Rejected locally, with no network call,
    /// when no file is selected.
    pub async fn upload_passes(&self, file: Option<File>) {
        let feedback = match file {
            None => NO_FILE_MSG.to_string(),
            Some(file) => match self.token() {
                Ok(token) => match self.api_client.add_passes(&token, &file).await {
                    Ok(response) => op_feedback(&response, PASSES_ADDED_MSG),
                    Err(e) => e.to_string(),
                },
                Err(e) => e.to_string(),
            },
        };
        *self.state.admin.passes_feedback.borrow_mut() = feedback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_status_lists_counts() {
        let response = HealthcheckResponse {
            status: "OK".into(),
            n_stations: 30,
            n_tags: 1200,
            n_passes: 50000,
        };
        assert_eq!(
            health_summary(&response),
            "Healthy: Stations - 30, Tags - 1200, Passes - 50000"
        );
    }

    #[test]
    fn non_ok_health_is_a_failure_despite_transport_success() {
        let response = HealthcheckResponse {
            status: "failed".into(),
            n_stations: 0,
            n_tags: 0,
            n_passes: 0,
        };
        assert_eq!(
            health_summary(&response),
            "Health check failed: Database issue detected."
        );
    }

    #[test]
    fn op_feedback_follows_payload_status() {
        let ok = AdminOpResponse {
            status: "OK".into(),
            info: None,
        };
        assert_eq!(op_feedback(&ok, STATIONS_RESET_MSG), STATIONS_RESET_MSG);

        let failed = AdminOpResponse {
            status: "failed".into(),
            info: Some("db connection lost".into()),
        };
        assert_eq!(
            op_feedback(&failed, STATIONS_RESET_MSG),
            "Error: db connection lost"
        );

        let odd = AdminOpResponse {
            status: "maybe".into(),
            info: None,
        };
        assert_eq!(op_feedback(&odd, STATIONS_RESET_MSG), UNEXPECTED_RESPONSE_MSG);
    }
}
