use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub upload: UploadConfig,
}

/// Contrato con el servicio de análisis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub predict_path: String,
    pub upload_field: String,
    pub stats_header: String,
    pub result_mime: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            upload: UploadConfig::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            predict_path: "/predict".to_string(),
            upload_field: "file".to_string(),
            stats_header: "x-parking-stats".to_string(),
            result_mime: "video/mp4".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let upload = UploadConfig::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            upload: UploadConfig {
                predict_path: option_env!("PREDICT_PATH")
                    .map(str::to_string)
                    .unwrap_or(upload.predict_path),
                upload_field: option_env!("UPLOAD_FIELD")
                    .map(str::to_string)
                    .unwrap_or(upload.upload_field),
                stats_header: option_env!("STATS_HEADER")
                    .map(str::to_string)
                    .unwrap_or(upload.stats_header),
                result_mime: option_env!("RESULT_MIME")
                    .map(str::to_string)
                    .unwrap_or(upload.result_mime),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    /// URL completa del endpoint de análisis (sin barras duplicadas)
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}",
            self.backend_url().trim_end_matches('/'),
            self.upload.predict_path.trim_start_matches('/')
        )
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log; valores desconocidos caen en Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_predict_endpoint() {
        let config = AppConfig::default();
        assert_eq!(config.predict_url(), "http://localhost:5000/predict");
        assert_eq!(config.upload.upload_field, "file");
        assert_eq!(config.upload.stats_header, "x-parking-stats");
        assert_eq!(config.upload.result_mime, "video/mp4");
    }

    #[test]
    fn predict_url_joins_without_double_slash() {
        let mut config = AppConfig::default();
        config.backend_url_development = "https://analyzer.example/".to_string();
        config.upload.predict_path = "predict".to_string();
        assert_eq!(config.predict_url(), "https://analyzer.example/predict");
    }

    #[test]
    fn production_environment_switches_backend() {
        let mut config = AppConfig::default();
        config.backend_url_production = "https://prod.example".to_string();
        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://prod.example");
    }

    #[test]
    fn log_level_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
