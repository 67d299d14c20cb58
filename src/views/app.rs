// ============================================================================
// APP VIEW - Shell layout and route dispatch
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::router::{effective_route, Route};
use crate::state::AppState;
use crate::views::{render_admin, render_app_bar, render_debts, render_footer, render_home, render_map};

/// Render the whole application: app bar, the page for the current route,
/// and the footer.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("app").build();

    let app_bar = render_app_bar(state)?;
    append_child(&container, &app_bar)?;

    let main = ElementBuilder::new("main")?.class("app-main").build();

    // The admin page is unreachable for non-admin sessions; this is UI
    // convenience only, real access control is server-side.
    let route = effective_route(state.current_route(), state.session.is_admin());
    let page = match route {
        Route::Home => render_home(state)?,
        Route::Map => render_map(state)?,
        Route::Debts => render_debts(state)?,
        Route::Admin => render_admin(state)?,
    };
    append_child(&main, &page)?;
    append_child(&container, &main)?;

    let footer = render_footer()?;
    append_child(&container, &footer)?;

    Ok(container)
}
