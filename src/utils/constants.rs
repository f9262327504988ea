/// Mensaje cuando se pulsa analizar sin vídeo seleccionado
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Mensaje genérico para cualquier fallo de red o HTTP
pub const UPLOAD_FAILED_MESSAGE: &str = "Error processing video. Please try again.";

/// Textos del botón de análisis
pub const ANALYZE_LABEL: &str = "Analyze Parking Spaces";
pub const PROCESSING_LABEL: &str = "Processing...";

/// Tipos de vídeo aceptados por el input
pub const VIDEO_ACCEPT: &str = "video/*";
