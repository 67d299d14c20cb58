// ============================================================================
// APP - Main application
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Create the application. The session is restored from the three
    /// tab-scoped storage keys, so a reload inside the tab stays logged in.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        if state.session.is_logged_in() {
            log::info!("💾 [APP] Session restored from storage");
        }

        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Full render: rebuild the whole tree under #app.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let tree = render_app(&self.state)?;
        set_inner_html(&self.root, "");
        append_child(&self.root, &tree)?;
        Ok(())
    }
}
