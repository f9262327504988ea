// ============================================================================
// RESULT PANEL VIEW - Vídeo analizado + estadísticas + leyenda
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::stats::ParkingStats;
use crate::state::upload_state::UploadState;

/// Retorna None mientras no haya resultado
pub fn render_result_panel<F>(state: &UploadState<F>) -> Result<Option<Element>, JsValue> {
    let Some(url) = state.get_result_url() else {
        return Ok(None);
    };

    let stats = match state.get_stats() {
        Some(stats) => Some(render_stats(&stats)?),
        None => None,
    };

    let source = ElementBuilder::new("source")?
        .attr("src", &url)?
        .attr("type", "video/mp4")?
        .build();

    // `key` distinto por URL: el navegador recarga el vídeo al cambiar
    let video = ElementBuilder::new("video")?
        .class("result-video")
        .attr("data-key", &url)?
        .attr("preload", "auto")?
        .flag("controls", true)?
        .flag("playsinline", true)?
        .child(source)?
        .build();

    let legend = ElementBuilder::new("div")?
        .class("legend")
        .child(ElementBuilder::new("h3")?.text("Legend:").build())?
        .child(legend_item("legend-swatch legend-swatch--vacant", "Vacant Space")?)?
        .child(legend_item("legend-swatch legend-swatch--occupied", "Occupied Space")?)?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("card result-card")
        .child(
            ElementBuilder::new("h2")?
                .class("card-title")
                .text("Analyzed Parking Spaces")
                .build(),
        )?
        .child_opt(stats)?
        .child(video)?
        .child(legend)?
        .build();

    Ok(Some(panel))
}

fn render_stats(stats: &ParkingStats) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("stats")
        .child(ElementBuilder::new("p")?.text(&format!("Total parking spaces: {}", stats.total_spaces)).build())?
        .child(ElementBuilder::new("p")?.text(&format!("Occupied: {}", stats.occupied)).build())?
        .child(ElementBuilder::new("p")?.text(&format!("Vacant: {}", stats.vacant)).build())?
        .child(
            ElementBuilder::new("p")?
                .class("stats-occupancy")
                .text(&format!("Occupancy: {:.0}%", stats.occupancy_percent()))
                .build(),
        )?
        .build())
}

fn legend_item(swatch_class: &str, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("legend-item")
        .child(ElementBuilder::new("span")?.class(swatch_class).build())?
        .child(ElementBuilder::new("span")?.text(label).build())?
        .build())
}
