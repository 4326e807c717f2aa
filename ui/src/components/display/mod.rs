pub mod alert_dialog;
pub mod loading_indicator;
pub mod photo_preview;

pub use alert_dialog::*;
pub use loading_indicator::*;
pub use photo_preview::*;
