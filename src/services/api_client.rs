// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// One method per backend operation. No business logic, no state beyond the
// base URL; the caller reads the session token at call time and passes it
// in. Dates are already normalized to YYYYMMDD when they reach this layer.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData, UrlSearchParams};

use crate::config::CONFIG;
use crate::models::{
    AdminOpResponse, HealthcheckResponse, LoginResponse, OperatorIdResponse, OwedByResponse,
    PassSummaryResponse, SettleOutcome,
};
use crate::services::error::{classify_status, ApiError, ServerErrorBody};
use crate::utils::constants::AUTH_HEADER;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// POST /api/login with a form-encoded body. Returns the opaque token.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/api/login", self.base_url);
        let body = UrlSearchParams::new()
            .map_err(|_| ApiError::Unexpected("Could not build form body".to_string()))?;
        body.append("username", username);
        body.append("password", password);

        log::info!("🔐 Logging in as: {}", username);

        // The browser sets the x-www-form-urlencoded content type for a
        // UrlSearchParams body.
        let response = Request::post(&url)
            .body(body)
            .map_err(|e| ApiError::Unexpected(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<LoginResponse>(response).await
    }

    /// POST /api/logout. A 200 means the server invalidated the token.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let url = format!("{}/api/logout", self.base_url);

        log::info!("🚪 Logging out");

        let response = Request::post(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Ok(())
    }

    /// GET /api/operatorID/{username}: resolve the operator id the backend
    /// derives from the username.
    pub async fn operator_id(
        &self,
        token: &str,
        username: &str,
    ) -> Result<OperatorIdResponse, ApiError> {
        let url = format!("{}/api/operatorID/{}", self.base_url, username);

        log::info!("🔍 Resolving operator id for: {}", username);

        let response = Request::get(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<OperatorIdResponse>(response).await
    }

    /// GET /api/operatorPassSummary/{op}/{from}/{to}. An absent
    /// `tollStations` field in the payload means "no data", not an error.
    pub async fn operator_pass_summary(
        &self,
        token: &str,
        operator: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<PassSummaryResponse, ApiError> {
        let url = format!(
            "{}/api/operatorPassSummary/{}/{}/{}",
            self.base_url, operator, date_from, date_to
        );

        log::info!(
            "🗺️ Fetching pass summary for {} ({} - {})",
            operator,
            date_from,
            date_to
        );

        let response = Request::get(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<PassSummaryResponse>(response).await
    }

    /// GET /api/owedBy/{op}/{from}/{to}. A 204 means no debts for the
    /// period and maps to `None`.
    pub async fn owed_by(
        &self,
        token: &str,
        operator: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<Option<OwedByResponse>, ApiError> {
        let url = format!(
            "{}/api/owedBy/{}/{}/{}",
            self.base_url, operator, date_from, date_to
        );

        log::info!(
            "💶 Fetching debts owed by {} ({} - {})",
            operator,
            date_from,
            date_to
        );

        let response = Request::get(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if response.status() == 204 {
            log::info!("💶 No debts for the selected period");
            return Ok(None);
        }
        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<OwedByResponse>(response).await.map(Some)
    }

    /// POST /api/settleDebts/{op}/{counterparty}/{from}/{to}.
    pub async fn settle_debts(
        &self,
        token: &str,
        operator: &str,
        counterparty: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<SettleOutcome, ApiError> {
        let url = format!(
            "{}/api/settleDebts/{}/{}/{}/{}",
            self.base_url, operator, counterparty, date_from, date_to
        );

        log::info!("🤝 Settling debt: {} -> {}", operator, counterparty);

        let response = Request::post(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if response.status() == 204 {
            return Ok(SettleOutcome::NothingToSettle);
        }
        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Ok(SettleOutcome::Settled)
    }

    /// GET /api/admin/healthcheck.
    pub async fn healthcheck(&self, token: &str) -> Result<HealthcheckResponse, ApiError> {
        let url = format!("{}/api/admin/healthcheck", self.base_url);

        log::info!("🩺 Running health check");

        let response = Request::get(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<HealthcheckResponse>(response).await
    }

    /// POST /api/admin/resetstations.
    pub async fn reset_stations(&self, token: &str) -> Result<AdminOpResponse, ApiError> {
        self.admin_post(token, "resetstations").await
    }

    /// POST /api/admin/resetpasses.
    pub async fn reset_passes(&self, token: &str) -> Result<AdminOpResponse, ApiError> {
        self.admin_post(token, "resetpasses").await
    }

    /// POST /api/admin/addpasses with the CSV as multipart field `file`.
    pub async fn add_passes(&self, token: &str, file: &File) -> Result<AdminOpResponse, ApiError> {
        let url = format!("{}/api/admin/addpasses", self.base_url);
        let form = FormData::new()
            .map_err(|_| ApiError::Unexpected("Could not build form data".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Unexpected("Could not attach file".to_string()))?;

        log::info!("📤 Uploading pass file: {}", file.name());

        // The browser sets the multipart boundary for a FormData body.
        let response = Request::post(&url)
            .header(AUTH_HEADER, token)
            .body(form)
            .map_err(|e| ApiError::Unexpected(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<AdminOpResponse>(response).await
    }

    async fn admin_post(&self, token: &str, endpoint: &str) -> Result<AdminOpResponse, ApiError> {
        let url = format!("{}/api/admin/{}", self.base_url, endpoint);

        log::info!("🔄 Admin reset: {}", endpoint);

        let response = Request::post(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;

        if !response.ok() {
            return Err(Self::error_from(response).await);
        }
        Self::parse_json::<AdminOpResponse>(response).await
    }

    /// Map a non-2xx response to the error taxonomy, reading the server's
    /// message/info field when the body parses.
    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let server_text = response
            .json::<ServerErrorBody>()
            .await
            .ok()
            .and_then(ServerErrorBody::text);
        classify_status(status, server_text)
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Unexpected(format!("Parse error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
