// ============================================================================
// SESSION STATE - Shared session holder backed by sessionStorage
// ============================================================================
// Views take an immutable snapshot at render time; mutation happens only
// through the methods here, from the login/logout handlers. Every write is
// mirrored to the three tab-scoped storage keys so a reload inside the tab
// restores the session.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::SessionRecord;
use crate::utils::constants::{AUTH_TOKEN_KEY, OPERATOR_ID_KEY, USERNAME_KEY};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

#[derive(Clone)]
pub struct SessionState {
    record: Rc<RefCell<SessionRecord>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            record: Rc::new(RefCell::new(SessionRecord::LoggedOut)),
        }
    }

    /// Rebuild the record from the storage keys left by a previous render
    /// of this tab. Token and username only -> the login never completed.
    pub fn restore() -> Self {
        let token = load_from_storage(AUTH_TOKEN_KEY);
        let username = load_from_storage(USERNAME_KEY);
        let operator_id = load_from_storage(OPERATOR_ID_KEY);

        let record = match (token, username, operator_id) {
            (Some(token), Some(username), Some(operator_id)) => {
                log::info!("💾 Session restored for: {}", username);
                SessionRecord::LoggedIn {
                    token,
                    username,
                    operator_id,
                }
            }
            (Some(token), Some(username), None) => {
                log::warn!("⚠️ Incomplete session in storage (no operator id)");
                SessionRecord::Partial { token, username }
            }
            _ => SessionRecord::LoggedOut,
        };

        Self {
            record: Rc::new(RefCell::new(record)),
        }
    }

    /// Immutable copy for this render pass.
    pub fn snapshot(&self) -> SessionRecord {
        self.record.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.record.borrow().is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.record.borrow().is_admin()
    }

    pub fn token(&self) -> Option<String> {
        self.record.borrow().token().map(str::to_string)
    }

    /// Store token and username after a 200 from /api/login. The session
    /// is not logged in yet; the operator-id lookup completes it.
    pub fn begin_login(&self, token: String, username: String) {
        if let Err(e) = save_to_storage(AUTH_TOKEN_KEY, &token) {
            log::error!("❌ {}", e);
        }
        if let Err(e) = save_to_storage(USERNAME_KEY, &username) {
            log::error!("❌ {}", e);
        }
        *self.record.borrow_mut() = SessionRecord::begin_login(token, username);
    }

    /// Store the resolved operator id and complete the login.
    pub fn complete_login(&self, operator_id: String) {
        if let Err(e) = save_to_storage(OPERATOR_ID_KEY, &operator_id) {
            log::error!("❌ {}", e);
        }
        let record = self.record.borrow().clone();
        *self.record.borrow_mut() = record.complete_login(operator_id);
    }

    /// Clear the record and all three storage keys together.
    pub fn clear(&self) {
        for key in [AUTH_TOKEN_KEY, OPERATOR_ID_KEY, USERNAME_KEY] {
            if let Err(e) = remove_from_storage(key) {
                log::error!("❌ {}", e);
            }
        }
        *self.record.borrow_mut() = SessionRecord::LoggedOut;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
