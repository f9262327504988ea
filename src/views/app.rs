// ============================================================================
// APP VIEW - Layout principal (navbar + uploader + resultado)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, Listeners};
use crate::viewmodels::BrowserUploadViewModel;
use crate::views::{render_result_panel, render_uploader};

/// Renderizar la app completa a partir del estado actual
pub fn render_app(vm: &BrowserUploadViewModel, listeners: &Listeners) -> Result<Element, JsValue> {
    let state = vm.state();

    let navbar = ElementBuilder::new("nav")?
        .class("navbar")
        .child(
            ElementBuilder::new("h1")?
                .class("navbar-title")
                .text("🚗 Parking Space Analyzer")
                .build(),
        )?
        .build();

    let loading = if state.is_loading() {
        Some(
            ElementBuilder::new("div")?
                .class("card loading-card")
                .child(ElementBuilder::new("div")?.class("spinner").build())?
                .child(
                    ElementBuilder::new("p")?
                        .text("Processing video and analyzing parking spaces...")
                        .build(),
                )?
                .build(),
        )
    } else {
        None
    };

    let container = ElementBuilder::new("div")?
        .class("container")
        .child(render_uploader(vm, listeners)?)?
        .child_opt(loading)?
        .child_opt(render_result_panel(state)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app")
        .child(navbar)?
        .child(container)?
        .build())
}
