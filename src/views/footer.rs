// ============================================================================
// FOOTER
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};

pub fn render_footer() -> Result<Element, JsValue> {
    let footer = ElementBuilder::new("footer")?.class("app-footer").build();
    let text = ElementBuilder::new("p")?
        .class("footer-text")
        .text("© 2024 Toll Interoperability. All rights reserved.")
        .build();
    append_child(&footer, &text)?;
    Ok(footer)
}
