// ============================================================================
// APP BAR - Top navigation with role-conditional links
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub fn render_app_bar(state: &AppState) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("header")?.class("app-bar").build();
    let toolbar = ElementBuilder::new("div")?.class("toolbar").build();

    // Logo, click goes Home
    let logo = ElementBuilder::new("img")?
        .class("app-logo")
        .attr("src", "logo.png")?
        .attr("alt", "Logo")?
        .build();
    on_click(&logo, move |_| {
        crate::navigate(Route::Home);
    })?;
    append_child(&toolbar, &logo)?;

    // Navigation buttons; the Admin link only exists for the admin
    // operator id
    let nav = ElementBuilder::new("nav")?.class("nav-buttons").build();
    add_nav_button(&nav, "Home", Route::Home)?;
    add_nav_button(&nav, "Map", Route::Map)?;
    add_nav_button(&nav, "Debts", Route::Debts)?;
    if state.session.is_admin() {
        add_nav_button(&nav, "Admin", Route::Admin)?;
    }
    append_child(&toolbar, &nav)?;

    // Login/Logout affordance
    if state.session.is_logged_in() {
        let logout_btn = ElementBuilder::new("button")?
            .class("btn-outlined")
            .text("Logout")
            .build();
        let state_clone = state.clone();
        on_click(&logout_btn, move |_| {
            let state = state_clone.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state.clone());
                match vm.logout().await {
                    Ok(()) => {
                        alert("Successfully logged out.");
                        state.set_route(Route::Home);
                        let _ = crate::router::push_route(Route::Home);
                    }
                    Err(e) => {
                        alert(&format!("Logout failed: {}", e));
                    }
                }
                crate::rerender_app();
            });
        })?;
        append_child(&toolbar, &logout_btn)?;
    } else {
        let login_btn = ElementBuilder::new("button")?
            .class("btn-outlined")
            .text("Login")
            .build();
        on_click(&login_btn, move |_| {
            crate::navigate(Route::Home);
        })?;
        append_child(&toolbar, &login_btn)?;
    }

    append_child(&bar, &toolbar)?;
    Ok(bar)
}

fn add_nav_button(nav: &Element, label: &str, route: Route) -> Result<(), JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-nav")
        .text(label)
        .build();
    on_click(&button, move |_| {
        crate::navigate(route);
    })?;
    append_child(nav, &button)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
