//! Registration page configuration
//!
//! Limits and timings the form controller works with. The registration state holds a
//! validated copy; anything invalid falls back to the defaults.

use serde::{Deserialize, Serialize};

use crate::services::errors::RegistrationError;

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_GIF: &str = "image/gif";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    pub photo: PhotoConfig,
    pub timing: TimingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoConfig {
    /// Largest accepted photo, inclusive
    pub max_bytes: u64,
    pub allowed_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Simulated network latency for a submission
    pub submit_delay_ms: u64,
    /// Length of the review modal's closing animation
    pub modal_close_ms: u64,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024, // 2MB
            allowed_types: vec![
                MIME_JPEG.to_string(),
                MIME_PNG.to_string(),
                MIME_GIF.to_string(),
            ],
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            modal_close_ms: 300,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            photo: PhotoConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl PhotoConfig {
    pub fn allows(&self, mime: &str) -> bool {
        self.allowed_types.iter().any(|allowed| allowed == mime)
    }
}

impl RegistrationConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.photo.max_bytes == 0 {
            errors.push("photo.max_bytes must be greater than 0".to_string());
        }

        if self.photo.allowed_types.is_empty() {
            errors.push("photo.allowed_types must not be empty".to_string());
        }

        if let Some(bad) = self
            .photo
            .allowed_types
            .iter()
            .find(|mime| !mime.starts_with("image/"))
        {
            errors.push(format!("photo.allowed_types entry '{}' is not an image type", bad));
        }

        if self.timing.modal_close_ms > 5_000 {
            errors.push("timing.modal_close_ms must be at most 5000".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parse a complete configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, RegistrationError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| RegistrationError::Configuration {
                field: "json".to_string(),
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|errors| RegistrationError::Configuration {
                field: "validate".to_string(),
                message: errors.join("; "),
            })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegistrationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.photo.max_bytes, 2 * 1024 * 1024);
        assert_eq!(config.timing.submit_delay_ms, 1500);
        assert_eq!(config.timing.modal_close_ms, 300);
    }

    #[test]
    fn test_pdf_is_not_allowed_by_default() {
        let config = PhotoConfig::default();
        assert!(config.allows("image/png"));
        assert!(!config.allows("image/pdf"));
        assert!(!config.allows("application/pdf"));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = RegistrationConfig::default();
        config.photo.max_bytes = 0;
        config.photo.allowed_types.push("application/pdf".to_string());

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "photo": { "max_bytes": 1024, "allowed_types": ["image/png"] },
            "timing": { "submit_delay_ms": 0, "modal_close_ms": 0 }
        }"#;
        let config = RegistrationConfig::from_json(json).unwrap();
        assert_eq!(config.photo.max_bytes, 1024);
        assert!(!config.photo.allows("image/jpeg"));

        assert!(RegistrationConfig::from_json("{}").is_err());
    }
}
