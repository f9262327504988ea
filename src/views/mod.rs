pub mod app;
pub mod uploader;
pub mod result_panel;

pub use app::render_app;
pub use uploader::render_uploader;
pub use result_panel::render_result_panel;
