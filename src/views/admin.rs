// ============================================================================
// ADMIN VIEW - Health check, data resets, bulk pass upload
// ============================================================================

use std::future::Future;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{append_child, on_change, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::AdminViewModel;

pub fn render_admin(state: &AppState) -> Result<Element, JsValue> {
    let busy = *state.admin.busy.borrow();

    let page = ElementBuilder::new("div")?.class("admin-page").build();

    // Full-page busy overlay while a call is outstanding
    if busy {
        let backdrop = ElementBuilder::new("div")?
            .class("busy-backdrop")
            .child(ElementBuilder::new("div")?.class("spinner").build())?
            .build();
        append_child(&page, &backdrop)?;
    }

    let grid = ElementBuilder::new("div")?.class("admin-grid").build();
    append_child(&grid, &create_health_card(state)?)?;
    append_child(&grid, &create_reset_card(state)?)?;
    append_child(&grid, &create_add_passes_card(state)?)?;
    append_child(&page, &grid)?;

    Ok(page)
}

fn create_health_card(state: &AppState) -> Result<Element, JsValue> {
    let card = create_card("System Health", "Check database connectivity.")?;

    let actions = ElementBuilder::new("div")?.class("card-actions").build();
    let check_btn = create_action_button(state, "Check Health")?;
    {
        let state = state.clone();
        on_click(&check_btn, move |_| {
            run_admin_action(&state, |vm| async move { vm.check_health().await });
        })?;
    }
    append_child(&actions, &check_btn)?;

    // Health line; severity follows the "Healthy" prefix
    if !*state.admin.busy.borrow() {
        let status = state.admin.health_status.borrow().clone();
        let (text, class) = if status.is_empty() {
            ("Not Checked".to_string(), "alert alert-error")
        } else if status.starts_with("Healthy") {
            (status, "alert alert-success")
        } else {
            (status, "alert alert-error")
        };
        let alert = ElementBuilder::new("div")?.class(class).text(&text).build();
        append_child(&actions, &alert)?;
    }

    append_child(&card, &actions)?;
    Ok(card)
}

fn create_reset_card(state: &AppState) -> Result<Element, JsValue> {
    let card = create_card("Data Reset", "Reset stations or passes from the database.")?;

    let actions = ElementBuilder::new("div")?.class("card-actions").build();

    let stations_btn = create_action_button(state, "Reset Stations")?;
    {
        let state = state.clone();
        on_click(&stations_btn, move |_| {
            run_admin_action(&state, |vm| async move { vm.reset_stations().await });
        })?;
    }
    append_child(&actions, &stations_btn)?;

    let passes_btn = create_action_button(state, "Reset Passes")?;
    {
        let state = state.clone();
        on_click(&passes_btn, move |_| {
            run_admin_action(&state, |vm| async move { vm.reset_passes().await });
        })?;
    }
    append_child(&actions, &passes_btn)?;
    append_child(&card, &actions)?;

    append_feedback(&card, &state.admin.reset_feedback.borrow())?;
    Ok(card)
}

fn create_add_passes_card(state: &AppState) -> Result<Element, JsValue> {
    let card = create_card("Add Passes", "Upload CSV to add new pass data.")?;

    let file_input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "file")?
        .attr("accept", ".csv")?
        .build();
    {
        let pass_file = state.admin.pass_file.clone();
        on_change(&file_input, move |e| {
            let file = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            *pass_file.borrow_mut() = file;
        })?;
    }
    append_child(&card, &file_input)?;

    let actions = ElementBuilder::new("div")?.class("card-actions").build();
    let upload_btn = create_action_button(state, "Upload")?;
    {
        let state = state.clone();
        on_click(&upload_btn, move |_| {
            let file = state.admin.pass_file.borrow().clone();
            run_admin_action(&state, |vm| async move { vm.upload_passes(file).await });
        })?;
    }
    append_child(&actions, &upload_btn)?;
    append_child(&card, &actions)?;

    append_feedback(&card, &state.admin.passes_feedback.borrow())?;
    Ok(card)
}

/// Flip the busy flag, run one admin action, flip it back, re-render.
fn run_admin_action<F, Fut>(state: &AppState, action: F)
where
    F: FnOnce(AdminViewModel) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    if *state.admin.busy.borrow() {
        return;
    }
    *state.admin.busy.borrow_mut() = true;
    crate::rerender_app();

    let state = state.clone();
    spawn_local(async move {
        action(AdminViewModel::new(state.clone())).await;
        *state.admin.busy.borrow_mut() = false;
        crate::rerender_app();
    });
}

fn create_card(title: &str, description: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("admin-card").build();
    let title_el = ElementBuilder::new("h3")?.text(title).build();
    let description_el = ElementBuilder::new("p")?
        .class("card-description")
        .text(description)
        .build();
    append_child(&card, &title_el)?;
    append_child(&card, &description_el)?;
    Ok(card)
}

fn create_action_button(state: &AppState, label: &str) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-primary")
        .text(label)
        .build();
    if *state.admin.busy.borrow() {
        button.set_attribute("disabled", "disabled")?;
    }
    Ok(button)
}

fn append_feedback(card: &Element, feedback: &str) -> Result<(), JsValue> {
    if feedback.is_empty() {
        return Ok(());
    }
    let class = if feedback.contains("Error") || feedback.starts_with("No response") {
        "alert alert-error"
    } else {
        "alert alert-success"
    };
    let alert = ElementBuilder::new("div")?.class(class).text(feedback).build();
    append_child(card, &alert)
}
