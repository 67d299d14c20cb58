// ============================================================================
// MAP VIEW - Collapsible filters plus the Leaflet station map
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, on_input, ElementBuilder};
use crate::state::AppState;
use crate::utils::leaflet_ffi::{init_leaflet_map, set_station_markers};
use crate::viewmodels::map_viewmodel::markers_json;
use crate::viewmodels::MapViewModel;
use crate::views::home::input_target;

const MAP_CONTAINER_ID: &str = "map";

pub fn render_map(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("map-page").build();

    append_child(&page, &create_filters_panel(state)?)?;

    // Map container; Leaflet attaches once the subtree is in the document
    let map_container = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("map-container")
        .build();
    append_child(&page, &map_container)?;

    schedule_map_refresh(state);

    Ok(page)
}

/// Initialize the map and push the current markers after this render pass
/// has been attached to the DOM.
fn schedule_map_refresh(state: &AppState) {
    let stations = state.map.stations.borrow().clone();
    let username = state
        .session
        .snapshot()
        .username()
        .map(str::to_string)
        .unwrap_or_default();
    let map_config = CONFIG.map_config.clone();

    Timeout::new(0, move || {
        init_leaflet_map(
            MAP_CONTAINER_ID,
            map_config.default_center_lat,
            map_config.default_center_lng,
            map_config.default_zoom,
        );
        set_station_markers(&markers_json(&stations, &username));
    })
    .forget();
}

fn create_filters_panel(state: &AppState) -> Result<Element, JsValue> {
    let open = *state.map.filters_open.borrow();
    let loading = *state.map.loading.borrow();

    let panel = ElementBuilder::new("aside")?
        .class(if open { "map-filters" } else { "map-filters collapsed" })
        .build();

    // Header toggles the accordion
    let header = ElementBuilder::new("div")?.class("filters-header").build();
    if open {
        let title = ElementBuilder::new("h3")?.text("Filters").build();
        append_child(&header, &title)?;
    }
    let chevron = ElementBuilder::new("span")?
        .class("filters-chevron")
        .text(if open { "▲" } else { "▼" })
        .build();
    append_child(&header, &chevron)?;
    {
        let state = state.clone();
        on_click(&header, move |_| {
            let open = *state.map.filters_open.borrow();
            *state.map.filters_open.borrow_mut() = !open;
            crate::rerender_app();
        })?;
    }
    append_child(&panel, &header)?;

    if !open {
        return Ok(panel);
    }

    let body = ElementBuilder::new("div")?.class("filters-body").build();

    let from_input = create_date_field(&body, "From Date", &state.map.from_date.borrow())?;
    {
        let from_date = state.map.from_date.clone();
        on_input(&from_input, move |e| {
            if let Some(input) = input_target(&e) {
                *from_date.borrow_mut() = input.value();
            }
        })?;
    }

    let to_input = create_date_field(&body, "To Date", &state.map.to_date.borrow())?;
    {
        let to_date = state.map.to_date.clone();
        on_input(&to_input, move |e| {
            if let Some(input) = input_target(&e) {
                *to_date.borrow_mut() = input.value();
            }
        })?;
    }

    // Admins may query on behalf of any operator
    if state.session.is_admin() {
        let operator_input = create_labeled_input(
            &body,
            "Operator ID",
            "text",
            &state.map.operator_input.borrow(),
        )?;
        let operator = state.map.operator_input.clone();
        on_input(&operator_input, move |e| {
            if let Some(input) = input_target(&e) {
                *operator.borrow_mut() = input.value();
            }
        })?;
    }

    if let Some(error) = state.map.error.borrow().as_ref() {
        let alert = ElementBuilder::new("div")?
            .class("alert alert-error")
            .text(error)
            .build();
        append_child(&body, &alert)?;
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
            if *state.map.loading.borrow() {
                return;
            }
            *state.map.loading.borrow_mut() = true;
            crate::rerender_app();

            let state = state.clone();
            spawn_local(async move {
                MapViewModel::new(state.clone()).load().await;
                *state.map.loading.borrow_mut() = false;
                crate::rerender_app();
            });
        })?;
    }
    append_child(&body, &load_btn)?;

    append_child(&panel, &body)?;
    Ok(panel)
}

fn create_date_field(parent: &Element, label: &str, value: &str) -> Result<Element, JsValue> {
    create_labeled_input(parent, label, "date", value)
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
