/// Operator id the backend assigns to the administrator account.
/// Role-gated UI (admin card, admin route, operator override fields)
/// renders only when the stored operator id equals this value.
pub const ADMIN_OPERATOR_ID: &str = "admin";

// sessionStorage keys. The three keys are always written and cleared
// together with the session lifecycle.
pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const OPERATOR_ID_KEY: &str = "OpID";
pub const USERNAME_KEY: &str = "username";

/// Auth header expected by every authenticated backend endpoint.
pub const AUTH_HEADER: &str = "X-OBSERVATORY-AUTH";
