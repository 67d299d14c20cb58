// ============================================================================
// STORAGE - sessionStorage helpers (tab-scoped session keys)
// ============================================================================

use web_sys::{window, Storage};

pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_to_storage(key: &str, value: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("sessionStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Could not write '{}' to sessionStorage", key))
}

pub fn load_from_storage(key: &str) -> Option<String> {
    get_session_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("sessionStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("Could not remove '{}' from sessionStorage", key))
}
