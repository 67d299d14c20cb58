// ============================================================================
// API ERROR - Failure taxonomy for every backend call
// ============================================================================
// Classification order, per call:
//   1. response received, non-2xx  -> Unauthorized (401) or Server
//   2. request sent, no response   -> NoResponse
//   3. failed before the request   -> MissingToken / MissingInput
// A 2xx whose payload status field reports failure maps to Rejected.
// No variant triggers a retry; every failure is terminal for that action.
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

pub const GENERIC_SERVER_ERROR: &str = "Unexpected server error.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Required token was absent client-side; no request was issued.
    #[error("No authentication token found. Please log in.")]
    MissingToken,

    /// A required input was absent client-side; no request was issued.
    #[error("{0}")]
    MissingInput(String),

    /// HTTP 401. The session is NOT cleared; the user decides what to do.
    #[error("Unauthorized: Invalid or missing auth key.")]
    Unauthorized,

    /// Non-2xx other than 401, with the server's message when it sent one.
    #[error("{0}")]
    Server(String),

    /// Transport succeeded but the payload status field reported failure.
    #[error("Error: {0}")]
    Rejected(String),

    /// The request went out and nothing came back.
    #[error("No response from the server. Please check your network or backend.")]
    NoResponse,

    /// Catch-all: request build or payload parse failures.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Error body shape the backend uses across endpoints: `message` on the
/// auth routes, `info` on the admin ones.
#[derive(Debug, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
}

impl ServerErrorBody {
    pub fn text(self) -> Option<String> {
        self.message.or(self.info)
    }
}

/// Map a non-2xx status plus an optional parsed error body to an ApiError.
pub fn classify_status(status: u16, server_text: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Server(server_text.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_unauthorized_regardless_of_body() {
        assert_eq!(
            classify_status(401, Some("token expired".into())),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn other_statuses_prefer_server_text() {
        assert_eq!(
            classify_status(500, Some("db down".into())),
            ApiError::Server("db down".into())
        );
        assert_eq!(
            classify_status(400, None),
            ApiError::Server(GENERIC_SERVER_ERROR.into())
        );
    }

    #[test]
    fn body_text_prefers_message_over_info() {
        let body: ServerErrorBody =
            serde_json::from_str(r#"{"message":"bad creds","info":"ignored"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("bad creds"));

        let info_only: ServerErrorBody = serde_json::from_str(r#"{"info":"oops"}"#).unwrap();
        assert_eq!(info_only.text().as_deref(), Some("oops"));

        let empty: ServerErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.text().is_none());
    }

    #[test]
    fn display_messages_match_page_feedback() {
        assert_eq!(
            ApiError::MissingToken.to_string(),
            "No authentication token found. Please log in."
        );
        assert_eq!(
            ApiError::Unauthorized.to_string(),
            "Unauthorized: Invalid or missing auth key."
        );
        assert_eq!(
            ApiError::Rejected("duplicate pass".into()).to_string(),
            "Error: duplicate pass"
        );
    }
}
