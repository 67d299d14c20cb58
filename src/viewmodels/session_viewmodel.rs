// ============================================================================
// SESSION VIEWMODEL - Login/logout orchestration
// ============================================================================
// Login is two steps: /api/login stores token+username, then the
// operator-id lookup completes the session. If the lookup fails the stored
// credentials are kept (degraded login, surfaced as an error) and the UI
// stays logged out - the intermediate state is explicit, not an accident.
// ============================================================================

use crate::services::{ApiClient, ApiError};
use crate::state::AppState;

pub struct SessionViewModel {
    api_client: ApiClient,
    state: AppState,
}

impl SessionViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            api_client: ApiClient::new(),
            state,
        }
    }

    /// Authenticate and resolve the operator id. Only a fully completed
    /// flow leaves the session logged in.
    pub async fn login(&self, username: String, password: String) -> Result<(), ApiError> {
        let response = self.api_client.login(&username, &password).await?;
        self.state
            .session
            .begin_login(response.token.clone(), username.clone());

        // Follow-up lookup. On failure token/username stay stored and the
        // error propagates; the session remains partial.
        let lookup = self
            .api_client
            .operator_id(&response.token, &username)
            .await
            .map_err(|e| {
                log::error!("❌ Operator id lookup failed: {}", e);
                ApiError::Server("Failed to fetch operator details.".to_string())
            })?;

        self.state.session.complete_login(lookup.op_id);
        log::info!("✅ Logged in as: {}", username);
        Ok(())
    }

    /// Log out server-side, then clear the three session keys together.
    /// On failure the session is left untouched.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let token = self.state.session.token().ok_or(ApiError::MissingToken)?;
        self.api_client.logout(&token).await?;
        self.state.session.clear();
        log::info!("✅ Logged out");
        Ok(())
    }
}
