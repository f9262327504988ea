// ============================================================================
// APP - Aplicación principal: monta la vista y re-renderiza en cada cambio
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear, get_element_by_id, Listeners};
use crate::services::{ApiClient, BlobUrlFactory, ObjectUrlFactory};
use crate::viewmodels::BrowserUploadViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    view_model: BrowserUploadViewModel,
    root: Element,
    // Listeners del render actual; se sueltan al re-renderizar
    listeners: RefCell<Listeners>,
}

impl App {
    /// Crear nueva aplicación montada en #app
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let urls: Rc<dyn ObjectUrlFactory> = Rc::new(BlobUrlFactory);
        let view_model = BrowserUploadViewModel::new(ApiClient::new(), urls);

        // Batchear varios updates seguidos en un solo render
        view_model.state().subscribe(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            view_model,
            root,
            listeners: RefCell::new(Listeners::new()),
        })
    }

    /// Renderizar aplicación
    pub fn render(&self) -> Result<(), JsValue> {
        let listeners = Listeners::new();
        let view = render_app(&self.view_model, &listeners)?;
        clear(&self.root);
        append_child(&self.root, &view)?;
        log::debug!(
            "✅ [APP] Render completado ({:?}, {} listeners)",
            self.view_model.state().get_phase(),
            listeners.len()
        );
        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Liberar recursos (petición en curso, URL del vídeo)
    pub fn teardown(&self) {
        self.view_model.teardown();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if !self.view_model.state().is_closed() {
            self.view_model.teardown();
        }
    }
}
