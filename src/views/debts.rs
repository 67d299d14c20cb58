// ============================================================================
// DEBTS VIEW - Debt table, totals, settlement confirm dialog
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, ElementBuilder};
use crate::models::DebtRow;
use crate::state::AppState;
use crate::utils::format::euro;
use crate::viewmodels::DebtsViewModel;
use crate::views::home::input_target;

pub fn render_debts(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("debts-page").build();

    // Header
    let header = ElementBuilder::new("div")?.class("page-header").build();
    let title = ElementBuilder::new("h2")?.text("Debts & Payments").build();
    let subtitle = ElementBuilder::new("p")?
        .class("page-subtitle")
        .text("View and settle toll debts.")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;
    append_child(&page, &header)?;

    append_child(&page, &create_filter_row(state)?)?;

    if let Some(feedback) = state.debts.feedback.borrow().as_ref() {
        let class = if feedback.starts_with("Debt successfully") {
            "alert alert-success"
        } else {
            "alert alert-error"
        };
        let alert = ElementBuilder::new("div")?.class(class).text(feedback).build();
        append_child(&page, &alert)?;
    }

    append_child(&page, &create_table(state)?)?;

    // Running total, recomputed after every load and settlement
    let total_row = ElementBuilder::new("div")?.class("debts-total").build();
    let total_text = ElementBuilder::new("span")?
        .text(&format!("Total: {}", euro(*state.debts.total.borrow())))
        .build();
    append_child(&total_row, &total_text)?;
    append_child(&page, &total_row)?;

    if let Some(pending) = state.debts.pending_settlement.borrow().as_ref() {
        append_child(&page, &create_confirm_dialog(state, pending)?)?;
    }

    Ok(page)
}

fn create_filter_row(state: &AppState) -> Result<Element, JsValue> {
    let loading = *state.debts.loading.borrow();
    let row = ElementBuilder::new("div")?.class("filter-row").build();

    let from_input = create_labeled_input(&row, "Date From", "date", &state.debts.date_from.borrow())?;
    {
        let date_from = state.debts.date_from.clone();
        on_input(&from_input, move |e| {
            if let Some(input) = input_target(&e) {
                *date_from.borrow_mut() = input.value();
            }
        })?;
    }

    let to_input = create_labeled_input(&row, "Date To", "date", &state.debts.date_to.borrow())?;
    {
        let date_to = state.debts.date_to.clone();
        on_input(&to_input, move |e| {
            if let Some(input) = input_target(&e) {
                *date_to.borrow_mut() = input.value();
            }
        })?;
    }

    if state.session.is_admin() {
        let operator_input =
            create_labeled_input(&row, "Operator ID", "text", &state.debts.operator_input.borrow())?;
        let operator = state.debts.operator_input.clone();
        on_input(&operator_input, move |e| {
            if let Some(input) = input_target(&e) {
                *operator.borrow_mut() = input.value();
            }
        })?;
    }

    let load_btn = ElementBuilder::new("button")?
        .class("btn-primary")
        .text(if loading { "Loading..." } else { "Load Data" })
        .build();
    if loading {
        load_btn.set_attribute("disabled", "disabled")?;
    }
    {
        let state = state.clone();
        on_click(&load_btn, move |_| {
            if *state.debts.loading.borrow() {
                return;
            }
            *state.debts.loading.borrow_mut() = true;
            crate::rerender_app();

            let state = state.clone();
            spawn_local(async move {
                DebtsViewModel::new(state.clone()).load().await;
                *state.debts.loading.borrow_mut() = false;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&row, &load_btn)?;

    Ok(row)
}

fn create_table(state: &AppState) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("debts-table-wrapper").build();
    let table = ElementBuilder::new("table")?.class("debts-table").build();

    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for label in ["Operator", "Cost", "Action"] {
        let cell = ElementBuilder::new("th")?.text(label).build();
        append_child(&head_row, &cell)?;
    }
    append_child(&thead, &head_row)?;
    append_child(&table, &thead)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for row in state.debts.rows.borrow().iter() {
        append_child(&tbody, &create_debt_row(state, row)?)?;
    }
    append_child(&table, &tbody)?;

    append_child(&wrapper, &table)?;
    Ok(wrapper)
}

fn create_debt_row(state: &AppState, row: &DebtRow) -> Result<Element, JsValue> {
    let tr = ElementBuilder::new("tr")?.build();

    let operator_cell = ElementBuilder::new("td")?.text(&row.operator).build();
    let cost_cell = ElementBuilder::new("td")?.text(&euro(row.cost)).build();
    append_child(&tr, &operator_cell)?;
    append_child(&tr, &cost_cell)?;

    let action_cell = ElementBuilder::new("td")?.class("action-cell").build();
    let settle_btn = ElementBuilder::new("button")?
        .class("btn-small")
        .text("Settle Debt")
        .build();
    {
        let state = state.clone();
        let row = row.clone();
        on_click(&settle_btn, move |_| {
            *state.debts.pending_settlement.borrow_mut() = Some(row.clone());
            crate::rerender_app();
        })?;
    }
    append_child(&action_cell, &settle_btn)?;
    append_child(&tr, &action_cell)?;

    Ok(tr)
}

fn create_confirm_dialog(state: &AppState, pending: &DebtRow) -> Result<Element, JsValue> {
    let overlay = ElementBuilder::new("div")?.class("dialog-overlay").build();
    let dialog = ElementBuilder::new("div")?.class("dialog").build();

    let title = ElementBuilder::new("h3")?.text("Confirm Payment").build();
    let body = ElementBuilder::new("p")?
        .text(&format!("Pay {} to {}?", euro(pending.cost), pending.operator))
        .build();
    append_child(&dialog, &title)?;
    append_child(&dialog, &body)?;

    let actions = ElementBuilder::new("div")?.class("dialog-actions").build();

    let confirm_btn = ElementBuilder::new("button")?
        .class("btn-primary")
        .text("Confirm")
        .build();
    {
        let state = state.clone();
        on_click(&confirm_btn, move |_| {
            let state = state.clone();
            spawn_local(async move {
                DebtsViewModel::new(state.clone()).confirm_settlement().await;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&actions, &confirm_btn)?;

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn-plain")
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel_btn, move |_| {
            *state.debts.pending_settlement.borrow_mut() = None;
            crate::rerender_app();
        })?;
    }
    append_child(&actions, &cancel_btn)?;

    append_child(&dialog, &actions)?;
    append_child(&overlay, &dialog)?;
    Ok(overlay)
}

fn create_labeled_input(
    parent: &Element,
    label: &str,
    input_type: &str,
    value: &str,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label_el = ElementBuilder::new("label")?.text(label).build();
    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("value", value)?
        .build();
    append_child(&group, &label_el)?;
    append_child(&group, &input)?;
    append_child(parent, &group)?;
    Ok(input)
}
