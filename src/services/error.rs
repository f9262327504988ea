// ============================================================================
// UPLOAD ERROR - Errores del ciclo de subida/análisis
// ============================================================================

use wasm_bindgen::JsValue;
use crate::utils::constants::{NO_FILE_MESSAGE, UPLOAD_FAILED_MESSAGE};

/// Errores del controlador de subida.
///
/// Solo `NoFileSelected` y los fallos de transporte llegan al usuario;
/// el resto se registra en el log y se descarta.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("An upload is already in flight")]
    Busy,

    #[error("Network error: {message}")]
    Transport { message: String },

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Resource error: {message}")]
    Resource { message: String },

    #[error("Malformed stats header: {0}")]
    MetadataParse(#[from] serde_json::Error),

    #[error("Upload session already closed")]
    SessionClosed,
}

impl UploadError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
        }
    }

    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource {
            message: msg.into(),
        }
    }

    /// Errores JS del navegador (FormData, Blob, Url...)
    pub fn from_js(context: &str, value: JsValue) -> Self {
        Self::resource(format!("{}: {:?}", context, value))
    }

    /// Mensaje visible para el usuario, si este error se muestra
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::NoFileSelected => Some(NO_FILE_MESSAGE),
            Self::Transport { .. } | Self::Status { .. } | Self::Resource { .. } => {
                Some(UPLOAD_FAILED_MESSAGE)
            }
            Self::Busy | Self::MetadataParse(_) | Self::SessionClosed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_share_one_message() {
        let errors = [
            UploadError::transport("connection refused"),
            UploadError::Status { status: 500, status_text: "INTERNAL SERVER ERROR".into() },
            UploadError::resource("blob rejected"),
        ];
        for err in &errors {
            assert_eq!(err.user_message(), Some("Error processing video. Please try again."));
        }
    }

    #[test]
    fn internal_errors_stay_silent() {
        assert_eq!(UploadError::Busy.user_message(), None);
        assert_eq!(UploadError::SessionClosed.user_message(), None);
        assert_eq!(
            UploadError::NoFileSelected.user_message(),
            Some("Please select a file first.")
        );
    }

    #[test]
    fn status_display() {
        let err = UploadError::Status { status: 400, status_text: "BAD REQUEST".into() };
        assert_eq!(err.to_string(), "HTTP 400: BAD REQUEST");
    }
}
