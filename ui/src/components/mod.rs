//! User Interface Components
//!
//! Dioxus components for the registration page:
//!
//! - **display**: blocking dialogs, photo preview and busy indicators
//! - **forms**: the registration form and the details review modal
//! - **input**: validated inputs, selects and their error displays
//! - **layout**: navigation bar and footer

pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
