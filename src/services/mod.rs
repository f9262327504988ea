pub mod api_client;
pub mod error;
pub mod object_url;

pub use api_client::{AnalysisResponse, AnalysisTransport, ApiClient};
pub use error::UploadError;
pub use object_url::{BlobUrlFactory, ObjectUrl, ObjectUrlFactory};
