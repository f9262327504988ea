// ============================================================================
// PARKING ANALYZER PWA - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: subida del vídeo + materialización del resultado
// - Services: SOLO comunicación HTTP y recursos del navegador
// - State: UploadSession reactiva con Rc<RefCell>
// - Models: stats y sesión de subida
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
mod dom;
mod views;
pub mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 [APP] Parking Analyzer - backend {}", CONFIG.predict_url());

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // pagehide: liberar URL del vídeo y abortar la subida en curso
    if let Some(win) = web_sys::window() {
        dom::on_global_event(&win, "pagehide", |_e: &web_sys::Event| teardown_app());
    }

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        match app_cell.try_borrow() {
            Ok(app) => {
                if let Some(app) = app.as_ref() {
                    if let Err(e) = app.render() {
                        log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ [APP] App no está inicializada");
                }
            }
            Err(_) => log::warn!("⚠️ [APP] Render en curso, se omite"),
        }
    });
}

/// Desmontar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn teardown_app() {
    APP.with(|app_cell| {
        let app = app_cell.borrow_mut().take();
        if let Some(app) = app {
            log::info!("🧹 [APP] Desmontando");
            app.teardown();
        }
    });
}
