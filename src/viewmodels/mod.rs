pub mod upload_viewmodel;

pub use upload_viewmodel::UploadViewModel;

/// ViewModel con el transporte real del navegador
pub type BrowserUploadViewModel = UploadViewModel<crate::services::ApiClient>;
