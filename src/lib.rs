// ============================================================================
// TOLL OBSERVATORY DASHBOARD - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that render DOM (no business logic)
// - ViewModels: validation + API orchestration + state updates
// - Services: HTTP communication only
// - State: Rc<RefCell> state management
// - Models: wire shapes of the external backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;
use crate::router::Route;

// Static app instance for the lifetime of the tab
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook for readable stack traces
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Toll Observatory Dashboard starting...");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Back/forward navigation re-renders from the URL. Registered exactly
    // once here; see dom/events.rs on global listeners.
    if let Some(win) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().set_route(router::current_route());
                }
            });
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Full re-render of the app (login/logout, navigation, data loads).
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Render error: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App is not initialized");
        }
    });
}

/// Navigate to a route: push a history entry, update state, re-render.
pub fn navigate(route: Route) {
    if let Err(e) = router::push_route(route) {
        log::warn!("⚠️ Could not push history entry: {:?}", e);
    }
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            app.state().set_route(route);
        }
    });
    rerender_app();
}
