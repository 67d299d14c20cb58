// ============================================================================
// HOME VIEW - Login form, welcome panel, navigation cards
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_click, on_input, on_submit, ElementBuilder};
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("home-page").build();

    // Hero
    let hero = ElementBuilder::new("div")?.class("home-hero").build();
    let title = ElementBuilder::new("h1")?
        .text("Streamlined Toll Operations & Analytics")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("home-subtitle")
        .text("View, settle, and analyze toll data from various perspectives.")
        .build();
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;
    append_child(&page, &hero)?;

    let grid = ElementBuilder::new("div")?.class("home-grid").build();

    // Left column: login card or welcome panel
    if state.session.is_logged_in() {
        append_child(&grid, &create_welcome_panel()?)?;
    } else {
        append_child(&grid, &create_login_card(state)?)?;
    }

    // Right column: navigation cards
    let cards = ElementBuilder::new("div")?.class("nav-cards").build();
    append_child(
        &cards,
        &create_nav_card(
            state,
            "🗺️",
            "Map",
            "Visualize toll data on a map, and explore regions and toll roads.",
            Route::Map,
        )?,
    )?;
    append_child(
        &cards,
        &create_nav_card(
            state,
            "💶",
            "Debts",
            "View and settle outstanding debts related to toll usage.",
            Route::Debts,
        )?,
    )?;
    // Admin card only for the admin operator id
    if state.session.is_admin() {
        append_child(
            &cards,
            &create_nav_card(
                state,
                "📊",
                "Admin Dashboard",
                "Manage the system, users, and settings.",
                Route::Admin,
            )?,
        )?;
    }
    append_child(&grid, &cards)?;
    append_child(&page, &grid)?;

    Ok(page)
}

fn create_welcome_panel() -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?.class("welcome-panel").build();
    let heading = ElementBuilder::new("h2")?.text("Welcome!").build();
    let body = ElementBuilder::new("p")?
        .text("You have successfully logged in!")
        .build();
    append_child(&panel, &heading)?;
    append_child(&panel, &body)?;
    Ok(panel)
}

fn create_login_card(state: &AppState) -> Result<Element, JsValue> {
    let loading = *state.home.loading.borrow();

    let card = ElementBuilder::new("div")?.class("login-card").build();
    let heading = ElementBuilder::new("h2")?.text("Login").build();
    append_child(&card, &heading)?;

    // Inline error from the last attempt (or a blocked card click)
    if let Some(error) = state.home.error.borrow().as_ref() {
        let alert = ElementBuilder::new("div")?
            .class("alert alert-error")
            .text(error)
            .build();
        append_child(&card, &alert)?;
    }

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let username_input = create_text_input("text", "Username", &state.home.username.borrow())?;
    {
        let username = state.home.username.clone();
        on_input(&username_input, move |e| {
            if let Some(input) = input_target(&e) {
                *username.borrow_mut() = input.value();
            }
        })?;
    }
    append_child(&form, &username_input)?;

    let password_input = create_text_input("password", "Password", &state.home.password.borrow())?;
    {
        let password = state.home.password.clone();
        on_input(&password_input, move |e| {
            if let Some(input) = input_target(&e) {
                *password.borrow_mut() = input.value();
            }
        })?;
    }
    append_child(&form, &password_input)?;

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(if loading { "Logging in..." } else { "Login" })
        .build();
    if loading {
        submit.set_attribute("disabled", "disabled")?;
    }
    append_child(&form, &submit)?;

    {
        let state = state.clone();
        on_submit(&form, move |e| {
            e.prevent_default();
            if *state.home.loading.borrow() {
                return;
            }
            *state.home.loading.borrow_mut() = true;
            *state.home.error.borrow_mut() = None;
            crate::rerender_app();

            let state = state.clone();
            spawn_local(async move {
                let username = state.home.username.borrow().clone();
                let password = state.home.password.borrow().clone();
                let vm = SessionViewModel::new(state.clone());
                match vm.login(username, password).await {
                    Ok(()) => {
                        *state.home.password.borrow_mut() = String::new();
                    }
                    Err(e) => {
                        *state.home.error.borrow_mut() = Some(e.to_string());
                    }
                }
                *state.home.loading.borrow_mut() = false;
                crate::rerender_app();
            });
        })?;
    }

    append_child(&card, &form)?;
    Ok(card)
}

fn create_nav_card(
    state: &AppState,
    icon: &str,
    title: &str,
    description: &str,
    route: Route,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("nav-card").build();
    let icon_el = ElementBuilder::new("div")?.class("nav-card-icon").text(icon).build();
    let title_el = ElementBuilder::new("h3")?.text(title).build();
    let description_el = ElementBuilder::new("p")?
        .class("nav-card-description")
        .text(description)
        .build();
    append_child(&card, &icon_el)?;
    append_child(&card, &title_el)?;
    append_child(&card, &description_el)?;

    let state = state.clone();
    on_click(&card, move |_| {
        // Cards are a convenience, not an access gate
        if !state.session.is_logged_in() {
            *state.home.error.borrow_mut() =
                Some("Please log in to access this page.".to_string());
            crate::rerender_app();
            return;
        }
        crate::navigate(route);
    })?;

    Ok(card)
}

fn create_text_input(input_type: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("value", value)
        .map(|b| b.build())
}

pub(crate) fn input_target(event: &web_sys::InputEvent) -> Option<HtmlInputElement> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
}
