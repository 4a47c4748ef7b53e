//! Form components

pub mod notice;
pub mod quality_selector;
pub mod url_input;

// Re-export for convenience
pub use notice::notice_banner;
pub use quality_selector::{bitrate_selector, resolution_selector};
pub use url_input::url_input;
