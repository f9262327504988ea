// ============================================================================
// UPLOAD VIEWMODEL - LÓGICA DE SUBIDA Y MATERIALIZACIÓN DEL RESULTADO
// ============================================================================
// select_file → submit → materialize. El estado vive en UploadState y las
// vistas solo lo leen.
// ============================================================================

use std::rc::Rc;
use crate::config::CONFIG;
use crate::models::stats::ParkingStats;
use crate::models::upload::UploadFile;
use crate::services::api_client::{AnalysisResponse, AnalysisTransport};
use crate::services::error::UploadError;
use crate::services::object_url::{ObjectUrl, ObjectUrlFactory};
use crate::state::upload_state::UploadState;

/// ViewModel de subida
pub struct UploadViewModel<T: AnalysisTransport> {
    transport: Rc<T>,
    urls: Rc<dyn ObjectUrlFactory>,
    state: UploadState<T::File>,
    stats_header: String,
    result_mime: String,
}

/// Pone is_loading = false al salir de submit por cualquier camino
struct LoadingGuard<F> {
    state: UploadState<F>,
}

impl<F> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        self.state.update(|session| session.finish_loading());
    }
}

impl<T: AnalysisTransport> UploadViewModel<T> {
    pub fn new(transport: T, urls: Rc<dyn ObjectUrlFactory>) -> Self {
        Self::with_settings(
            transport,
            urls,
            CONFIG.upload.stats_header.clone(),
            CONFIG.upload.result_mime.clone(),
        )
    }

    pub fn with_settings(
        transport: T,
        urls: Rc<dyn ObjectUrlFactory>,
        stats_header: impl Into<String>,
        result_mime: impl Into<String>,
    ) -> Self {
        Self {
            transport: Rc::new(transport),
            urls,
            state: UploadState::new(),
            stats_header: stats_header.into(),
            result_mime: result_mime.into(),
        }
    }

    pub fn state(&self) -> &UploadState<T::File> {
        &self.state
    }

    /// Selección de archivo (siempre aceptada)
    pub fn select_file(&self, file: T::File) {
        log::info!("🎬 [UPLOAD] Archivo seleccionado: {} ({} bytes)", file.file_name(), file.size_bytes());
        self.state.update(|session| session.select_file(file));
    }

    /// Enviar el archivo seleccionado al servicio de análisis
    pub async fn submit(&self) -> Result<(), UploadError> {
        let file = match self.state.update(|session| session.begin_upload()) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("⚠️ [UPLOAD] Subida no iniciada: {}", e);
                return Err(e);
            }
        };
        let _loading = LoadingGuard {
            state: self.state.clone(),
        };

        log::info!("📤 [UPLOAD] Enviando {} para análisis...", file.file_name());

        let outcome = match self.transport.predict(&file).await {
            Ok(response) => self.materialize(response),
            // Petición abortada por teardown: no es un fallo de subida
            Err(_) if self.state.is_closed() => Err(UploadError::SessionClosed),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(()) => log::info!("✅ [UPLOAD] Análisis completado"),
            Err(UploadError::SessionClosed) => {
                log::info!("🧹 [UPLOAD] Respuesta descartada: sesión cerrada");
            }
            Err(e) => {
                log::error!("❌ [UPLOAD] Error procesando vídeo: {}", e);
                self.state.update(|session| session.fail_upload(e));
            }
        }

        outcome
    }

    /// Convertir la respuesta en URL local + stats.
    /// Un header de stats inválido no hace fallar la operación.
    pub fn materialize(&self, response: AnalysisResponse) -> Result<(), UploadError> {
        if self.state.is_closed() {
            return Err(UploadError::SessionClosed);
        }

        let stats = response
            .header(&self.stats_header)
            .and_then(|raw| match ParkingStats::from_header(raw) {
                Ok(stats) => {
                    if !stats.is_consistent() {
                        log::warn!("⚠️ [UPLOAD] Stats incoherentes: {:?}", stats);
                    }
                    Some(stats)
                }
                Err(e) => {
                    log::warn!("⚠️ [UPLOAD] Error parseando stats ({:?}): {}", raw, e);
                    None
                }
            });

        let url = ObjectUrl::create(&self.urls, &response.body, &self.result_mime)?;
        self.state.update(move |session| session.complete_upload(url, stats));
        Ok(())
    }

    /// Desmontaje: aborta la petición y libera el resultado
    pub fn teardown(&self) {
        log::info!("🧹 [UPLOAD] Cerrando sesión de subida");
        self.transport.abort();
        self.state.update(|session| session.close());
    }
}

impl<T: AnalysisTransport> Clone for UploadViewModel<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            urls: self.urls.clone(),
            state: self.state.clone(),
            stats_header: self.stats_header.clone(),
            result_mime: self.result_mime.clone(),
        }
    }
}
