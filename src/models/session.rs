// ============================================================================
// SESSION RECORD - Tagged session state
// ============================================================================
// Login is a two-step flow: POST /api/login yields the token, then a
// follow-up GET /api/operatorID/{username} resolves the operator id. The
// intermediate state is modeled explicitly instead of leaving a half-written
// session behind: only `LoggedIn` renders the logged-in UI.
// ============================================================================

use crate::utils::constants::ADMIN_OPERATOR_ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRecord {
    /// No credentials stored.
    LoggedOut,
    /// Login succeeded but the operator-id lookup has not (or failed).
    /// Token and username stay stored; the UI does not treat this as
    /// logged in.
    Partial { token: String, username: String },
    /// Fully authenticated: all three session keys are known.
    LoggedIn {
        token: String,
        username: String,
        operator_id: String,
    },
}

impl SessionRecord {
    pub fn token(&self) -> Option<&str> {
        match self {
            SessionRecord::LoggedOut => None,
            SessionRecord::Partial { token, .. } => Some(token),
            SessionRecord::LoggedIn { token, .. } => Some(token),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            SessionRecord::LoggedOut => None,
            SessionRecord::Partial { username, .. } => Some(username),
            SessionRecord::LoggedIn { username, .. } => Some(username),
        }
    }

    pub fn operator_id(&self) -> Option<&str> {
        match self {
            SessionRecord::LoggedIn { operator_id, .. } => Some(operator_id),
            _ => None,
        }
    }

    /// Only a complete session counts as logged in.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionRecord::LoggedIn { .. })
    }

    pub fn is_admin(&self) -> bool {
        self.operator_id() == Some(ADMIN_OPERATOR_ID)
    }

    /// Transition after a 200 from /api/login: token and username are
    /// stored together, operator id is still unknown.
    pub fn begin_login(token: String, username: String) -> Self {
        SessionRecord::Partial { token, username }
    }

    /// Transition after the operator-id lookup. A no-op from `LoggedOut`
    /// (there is nothing to complete).
    pub fn complete_login(self, operator_id: String) -> Self {
        match self {
            SessionRecord::Partial { token, username }
            | SessionRecord::LoggedIn {
                token, username, ..
            } => SessionRecord::LoggedIn {
                token,
                username,
                operator_id,
            },
            SessionRecord::LoggedOut => SessionRecord::LoggedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_login_is_not_logged_in() {
        let record = SessionRecord::begin_login("abc123".into(), "op1".into());
        assert!(!record.is_logged_in());
        assert_eq!(record.token(), Some("abc123"));
        assert_eq!(record.username(), Some("op1"));
        assert_eq!(record.operator_id(), None);
    }

    #[test]
    fn complete_login_sets_all_three_fields() {
        let record = SessionRecord::begin_login("abc123".into(), "op1".into())
            .complete_login("op1".into());
        assert!(record.is_logged_in());
        assert_eq!(record.token(), Some("abc123"));
        assert_eq!(record.username(), Some("op1"));
        assert_eq!(record.operator_id(), Some("op1"));
    }

    #[test]
    fn complete_login_from_logged_out_is_noop() {
        let record = SessionRecord::LoggedOut.complete_login("op1".into());
        assert_eq!(record, SessionRecord::LoggedOut);
    }

    #[test]
    fn admin_check_requires_complete_session() {
        let partial = SessionRecord::begin_login("t".into(), "admin".into());
        assert!(!partial.is_admin());

        let admin = partial.complete_login("admin".into());
        assert!(admin.is_admin());

        let operator = SessionRecord::begin_login("t".into(), "op1".into())
            .complete_login("op1".into());
        assert!(!operator.is_admin());
    }
}
