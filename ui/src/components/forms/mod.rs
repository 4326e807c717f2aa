pub mod details_modal;
pub mod registration_form;

pub use details_modal::*;
pub use registration_form::*;
