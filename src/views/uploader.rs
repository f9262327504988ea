// ============================================================================
// UPLOADER VIEW - Selector de vídeo + botón de análisis + error
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};
use crate::dom::{ElementBuilder, Listeners};
use crate::models::upload::UploadFile;
use crate::utils::constants::{ANALYZE_LABEL, PROCESSING_LABEL, VIDEO_ACCEPT};
use crate::viewmodels::BrowserUploadViewModel;

/// Renderizar tarjeta de subida
pub fn render_uploader(vm: &BrowserUploadViewModel, listeners: &Listeners) -> Result<Element, JsValue> {
    let state = vm.state();
    let is_loading = state.is_loading();

    let input = {
        let vm = vm.clone();
        ElementBuilder::new("input")?
            .class("file-input")
            .attr("type", "file")?
            .attr("accept", VIDEO_ACCEPT)?
            .on(listeners, "change", move |e: &Event| {
                let file = e
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                // Cancelar el diálogo no cambia la selección
                if let Some(file) = file {
                    vm.select_file(file);
                }
            })
            .build()
    };

    let button = {
        let vm = vm.clone();
        ElementBuilder::new("button")?
            .class("btn-analyze")
            .text(if is_loading { PROCESSING_LABEL } else { ANALYZE_LABEL })
            .flag("disabled", is_loading)?
            .on(listeners, "click", move |_e: &Event| {
                let vm = vm.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    // El resultado ya queda reflejado en el estado
                    let _ = vm.submit().await;
                });
            })
            .build()
    };

    let selected = state.get_selected_file().map(|file| {
        ElementBuilder::new("p").map(|b| {
            b.class("selected-file")
                .text(&format!("🎞️ {}", file.file_name()))
                .build()
        })
    });

    let error = match state.get_error_message() {
        Some(message) => Some(
            ElementBuilder::new("div")?
                .class("error-box")
                .text(&format!("⚠️ {}", message))
                .build(),
        ),
        None => None,
    };

    let controls = ElementBuilder::new("div")?
        .class("upload-controls")
        .child(input)?
        .child(button)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card upload-card")
        .child(
            ElementBuilder::new("h2")?
                .class("card-title")
                .text("Upload Parking Lot Video")
                .build(),
        )?
        .child(controls)?
        .child_opt(selected.transpose()?)?
        .child_opt(error)?
        .build())
}
