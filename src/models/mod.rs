pub mod stats;
pub mod upload;

pub use stats::ParkingStats;
pub use upload::{UploadFile, UploadPhase, UploadSession};
