use thiserror::Error;

use crate::registration::FieldId;
use crate::utils::format_bytes_human;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Photo error: {source}")]
    Photo {
        #[from]
        source: PhotoError,
    },

    #[error("Validation error: {invalid_count} field(s) failed, first: {first}")]
    Validation { invalid_count: usize, first: FieldId },

    #[error("Submission error: {message}")]
    Submission { message: String },

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },
}

/// Photo intake rejections. All of them are recovered locally by clearing the
/// file selection and informing the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Unsupported file type: {mime}")]
    UnsupportedType { mime: String },

    #[error("File too large: {size}/{limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("File could not be read: {name}")]
    Unreadable { name: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Dialog title shown to the user for this error
    pub fn title(&self) -> &'static str {
        match self {
            RegistrationError::Photo { source } => source.title(),
            RegistrationError::Validation { .. } => "Form Validation Error",
            RegistrationError::Submission { .. } => "Submission Failed",
            RegistrationError::Configuration { .. } => "Configuration Error",
        }
    }
}

impl PhotoError {
    pub fn title(&self) -> &'static str {
        match self {
            PhotoError::UnsupportedType { .. } => "Invalid File Type",
            PhotoError::TooLarge { .. } => "File Too Large",
            PhotoError::Unreadable { .. } => "Unreadable File",
        }
    }

    /// User-facing explanation, distinct per rejection kind
    pub fn user_message(&self) -> String {
        match self {
            PhotoError::UnsupportedType { .. } => {
                "Please upload a JPEG, PNG, or GIF image.".to_string()
            }
            PhotoError::TooLarge { limit, .. } => {
                format!("Please upload an image smaller than {}.", size_limit_label(*limit))
            }
            PhotoError::Unreadable { .. } => {
                "The selected file could not be read. Please choose another image.".to_string()
            }
        }
    }
}

fn size_limit_label(limit: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if limit >= MIB && limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format_bytes_human(limit)
    }
}
