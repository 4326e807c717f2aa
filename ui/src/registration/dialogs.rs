//! Declarative descriptions of the blocking dialogs the page shows.

use crate::registration::form_validation::GateEntry;
use crate::services::errors::{PhotoError, RegistrationError};

pub const DANGER_COLOR: &str = "#dc3545";
pub const SUCCESS_COLOR: &str = "#008000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogIcon {
    Error,
    Success,
}

impl DialogIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            DialogIcon::Error => "✗",
            DialogIcon::Success => "✓",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DialogIcon::Error => "dialog-icon error",
            DialogIcon::Success => "dialog-icon success",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DialogBody {
    Text(String),
    /// Success body: optional photo above a confirmation line
    Registered {
        photo: Option<String>,
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogConfig {
    pub title: String,
    pub body: DialogBody,
    pub icon: DialogIcon,
    pub confirm_color: &'static str,
    pub confirm_text: String,
    pub allow_outside_click: bool,
}

/// What happens once the user confirms the dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogFollowUp {
    None,
    ResetAfterSubmission,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDialog {
    pub config: DialogConfig,
    pub follow_up: DialogFollowUp,
}

impl DialogConfig {
    fn error(title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            body: DialogBody::Text(text.to_string()),
            icon: DialogIcon::Error,
            confirm_color: DANGER_COLOR,
            confirm_text: "OK".to_string(),
            allow_outside_click: true,
        }
    }

    pub fn photo_rejected(error: &PhotoError) -> Self {
        Self::error(error.title(), &error.user_message())
    }

    pub fn validation_failed(entry: GateEntry) -> Self {
        let text = match entry {
            GateEntry::ViewDetails => "Please complete all required fields before viewing details.",
            GateEntry::Submit => "Please correct the highlighted fields before submitting.",
        };
        Self::error("Form Validation Error", text)
    }

    pub fn submission_failed(error: &RegistrationError) -> Self {
        Self::error(error.title(), &error.to_string())
    }

    pub fn registration_successful(photo: Option<String>) -> Self {
        Self {
            title: "Registration Successful!".to_string(),
            body: DialogBody::Registered {
                photo,
                message: "Employee has been registered successfully.".to_string(),
            },
            icon: DialogIcon::Success,
            confirm_color: SUCCESS_COLOR,
            confirm_text: "OK".to_string(),
            allow_outside_click: false,
        }
    }
}
