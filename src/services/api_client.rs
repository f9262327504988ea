// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP con el servicio de análisis
// ============================================================================
// NO tiene lógica de negocio: envía el vídeo y devuelve bytes + headers
// ============================================================================

use std::cell::RefCell;
use gloo_net::http::Request;
use web_sys::{AbortController, AbortSignal, File, FormData};
use crate::config::CONFIG;
use crate::models::upload::UploadFile;
use crate::services::error::UploadError;

/// Respuesta cruda del análisis: vídeo procesado + headers
#[derive(Debug, Clone, Default)]
pub struct AnalysisResponse {
    pub body: Vec<u8>,
    pub headers: Vec<(String, String)>,
}

impl AnalysisResponse {
    /// Buscar header sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Transporte hacia el servicio de análisis
#[allow(async_fn_in_trait)]
pub trait AnalysisTransport {
    type File: UploadFile + Clone + 'static;

    /// Una única petición POST multipart
    async fn predict(&self, file: &Self::File) -> Result<AnalysisResponse, UploadError>;

    /// Abortar la petición en curso, si el transporte lo soporta
    fn abort(&self) {}
}

/// Cliente API - SOLO comunicación HTTP (stateless salvo el abort en curso)
pub struct ApiClient {
    predict_url: String,
    upload_field: String,
    in_flight: RefCell<Option<AbortController>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_endpoint(CONFIG.predict_url(), CONFIG.upload.upload_field.clone())
    }

    pub fn with_endpoint(predict_url: impl Into<String>, upload_field: impl Into<String>) -> Self {
        Self {
            predict_url: predict_url.into(),
            upload_field: upload_field.into(),
            in_flight: RefCell::new(None),
        }
    }

    async fn send(&self, form: FormData, signal: &AbortSignal) -> Result<AnalysisResponse, UploadError> {
        let response = Request::post(&self.predict_url)
            .abort_signal(Some(signal))
            .body(form)
            .map_err(|e| UploadError::transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::transport(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(UploadError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let headers: Vec<(String, String)> = response.headers().entries().collect();
        let body = response
            .binary()
            .await
            .map_err(|e| UploadError::transport(format!("Body read error: {}", e)))?;

        log::info!("✅ [API] Vídeo analizado recibido: {} bytes", body.len());

        Ok(AnalysisResponse { body, headers })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisTransport for ApiClient {
    type File = File;

    async fn predict(&self, file: &File) -> Result<AnalysisResponse, UploadError> {
        // Sin Content-Type manual: el navegador pone el boundary del multipart
        let form = FormData::new().map_err(|e| UploadError::from_js("FormData", e))?;
        form.append_with_blob_and_filename(&self.upload_field, file, &file.name())
            .map_err(|e| UploadError::from_js("FormData append", e))?;

        let controller = AbortController::new()
            .map_err(|e| UploadError::from_js("AbortController", e))?;
        let signal = controller.signal();
        *self.in_flight.borrow_mut() = Some(controller);

        log::info!("📤 [API] POST {} ({} bytes)", self.predict_url, file.size_bytes());
        let result = self.send(form, &signal).await;

        self.in_flight.borrow_mut().take();
        result
    }

    fn abort(&self) {
        if let Some(controller) = self.in_flight.borrow_mut().take() {
            log::warn!("🛑 [API] Abortando petición en curso");
            controller.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let response = AnalysisResponse {
            body: vec![0, 1, 2],
            headers: vec![
                ("content-type".into(), "video/mp4".into()),
                ("X-Parking-Stats".into(), "{'total_spaces': 1, 'occupied': 0, 'vacant': 1}".into()),
            ],
        };
        assert_eq!(
            response.header("x-parking-stats"),
            Some("{'total_spaces': 1, 'occupied': 0, 'vacant': 1}")
        );
        assert_eq!(response.header("CONTENT-TYPE"), Some("video/mp4"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn client_uses_configured_endpoint() {
        let client = ApiClient::with_endpoint("http://localhost:5000/predict", "file");
        assert_eq!(client.predict_url, "http://localhost:5000/predict");
        assert_eq!(client.upload_field, "file");
        assert!(client.in_flight.borrow().is_none());
    }
}
