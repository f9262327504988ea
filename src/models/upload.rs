// ============================================================================
// UPLOAD SESSION - Estado del ciclo selección → subida → resultado
// ============================================================================
// Struct propio con transiciones puras (sin red ni DOM). El ViewModel hace la
// parte async y llama a estas transiciones en orden.
// ============================================================================

use crate::models::stats::ParkingStats;
use crate::services::error::UploadError;
use crate::services::object_url::ObjectUrl;

/// Archivo elegido por el usuario
pub trait UploadFile {
    fn file_name(&self) -> String;
    fn size_bytes(&self) -> u64;
}

impl UploadFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }
}

/// Fase derivada para la capa de presentación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Sesión de subida: un archivo seleccionado, como mucho un resultado vivo
#[derive(Debug)]
pub struct UploadSession<F> {
    selected_file: Option<F>,
    result: Option<ObjectUrl>,
    stats: Option<ParkingStats>,
    is_loading: bool,
    error_message: Option<String>,
    closed: bool,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadSession<F> {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            result: None,
            stats: None,
            is_loading: false,
            error_message: None,
            closed: false,
        }
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result.as_ref().map(ObjectUrl::as_str)
    }

    pub fn stats(&self) -> Option<&ParkingStats> {
        self.stats.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn phase(&self) -> UploadPhase {
        if self.is_loading {
            UploadPhase::Uploading
        } else if self.error_message.is_some() {
            UploadPhase::Failed
        } else if self.result.is_some() {
            UploadPhase::Succeeded
        } else {
            UploadPhase::Idle
        }
    }

    /// Nuevo archivo: el resultado anterior se libera y las stats se limpian.
    /// El mensaje de error se mantiene hasta el próximo intento.
    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
        self.release_result();
        self.stats = None;
    }

    /// Inicio de subida. Devuelve el archivo a enviar.
    pub fn begin_upload(&mut self) -> Result<F, UploadError>
    where
        F: Clone,
    {
        if self.closed {
            return Err(UploadError::SessionClosed);
        }
        if self.is_loading {
            return Err(UploadError::Busy);
        }
        let Some(file) = self.selected_file.clone() else {
            self.set_error(&UploadError::NoFileSelected);
            return Err(UploadError::NoFileSelected);
        };
        self.error_message = None;
        self.is_loading = true;
        Ok(file)
    }

    /// Resultado nuevo: se revoca el anterior antes de asignar
    pub fn complete_upload(&mut self, result: ObjectUrl, stats: Option<ParkingStats>) {
        if self.closed {
            // drop de `result` lo revoca
            return;
        }
        self.release_result();
        self.result = Some(result);
        self.stats = stats;
    }

    /// Fallo de subida. El resultado previo (si hay) se mantiene.
    pub fn fail_upload(&mut self, error: &UploadError) {
        if self.closed {
            return;
        }
        self.set_error(error);
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    /// Desmontaje: libera todo y descarta respuestas tardías
    pub fn close(&mut self) {
        self.closed = true;
        self.release_result();
        self.stats = None;
        self.selected_file = None;
        self.is_loading = false;
    }

    fn set_error(&mut self, error: &UploadError) {
        if let Some(message) = error.user_message() {
            self.error_message = Some(message.to_string());
        }
    }

    fn release_result(&mut self) {
        if let Some(previous) = self.result.take() {
            drop(previous);
        }
    }
}
