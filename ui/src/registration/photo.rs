//! Photo intake: type and size checks, data URI encoding and the staged photo lifecycle.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::registration::dialogs::{DialogConfig, DialogFollowUp};
use crate::registration::tasks::{TaskKind, TaskToken};
use crate::registration::types::{RegistrationState, StagedPhoto};
use crate::services::config::{PhotoConfig, MIME_GIF, MIME_JPEG, MIME_PNG};
use crate::services::errors::PhotoError;
use crate::utils::format_bytes_human;
use crate::{console_debug, console_info, console_warn};

/// A file the user picked, before its bytes are read
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoCandidate {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl PhotoCandidate {
    /// Build a candidate, inferring the MIME type from the extension when the
    /// browser did not report one.
    pub fn new(name: impl Into<String>, reported_mime: Option<String>, size: u64) -> Self {
        let name = name.into();
        let mime = reported_mime
            .filter(|mime| !mime.is_empty())
            .or_else(|| mime_from_extension(&name).map(str::to_string))
            .unwrap_or_default();
        Self { name, mime, size }
    }

    /// Like [`new`](Self::new), but a file whose size the browser could not report is
    /// unreadable.
    pub fn from_reported(
        name: impl Into<String>,
        reported_mime: Option<String>,
        size: Option<u64>,
    ) -> Result<Self, PhotoError> {
        let name = name.into();
        match size {
            Some(size) => Ok(Self::new(name, reported_mime, size)),
            None => Err(PhotoError::Unreadable { name }),
        }
    }
}

pub fn mime_from_extension(name: &str) -> Option<&'static str> {
    let (_, extension) = name.rsplit_once('.')?;
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some(MIME_JPEG),
        "png" => Some(MIME_PNG),
        "gif" => Some(MIME_GIF),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Type is checked before size, so a large file of the wrong type reports the type.
pub fn check_photo(candidate: &PhotoCandidate, config: &PhotoConfig) -> Result<(), PhotoError> {
    if !config.allows(&candidate.mime) {
        return Err(PhotoError::UnsupportedType {
            mime: candidate.mime.clone(),
        });
    }

    if candidate.size > config.max_bytes {
        return Err(PhotoError::TooLarge {
            size: candidate.size,
            limit: config.max_bytes,
        });
    }

    Ok(())
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

impl RegistrationState {
    /// Accept or reject a newly selected file.
    ///
    /// On acceptance a decode token is returned and the preview shows the decoding
    /// state until [`finish_photo_decode`](Self::finish_photo_decode) is called with it.
    pub fn begin_photo_intake(&mut self, candidate: &PhotoCandidate) -> Result<TaskToken, PhotoError> {
        if let Err(error) = check_photo(candidate, &self.config.photo) {
            self.reject_photo(&error);
            return Err(error);
        }

        console_info!(
            "[Photo] Accepted {} ({}, {})",
            candidate.name,
            candidate.mime,
            format_bytes_human(candidate.size)
        );
        self.photo_decoding = true;
        Ok(self.tasks.begin(TaskKind::PhotoDecode))
    }

    /// Install the decoded photo if `token` is still the latest decode.
    ///
    /// `bytes` is `None` when the browser could not read the file. Returns whether the
    /// result was applied; stale results are dropped.
    pub fn finish_photo_decode(
        &mut self,
        token: TaskToken,
        candidate: &PhotoCandidate,
        bytes: Option<Vec<u8>>,
    ) -> bool {
        if !self.tasks.is_current(token) {
            console_debug!("[Photo] Dropping stale decode of {}", candidate.name);
            return false;
        }

        match bytes {
            Some(bytes) if bytes.len() as u64 > self.config.photo.max_bytes => {
                self.reject_photo(&PhotoError::TooLarge {
                    size: bytes.len() as u64,
                    limit: self.config.photo.max_bytes,
                });
            }
            Some(bytes) => {
                self.photo = Some(StagedPhoto {
                    file_name: candidate.name.clone(),
                    mime: candidate.mime.clone(),
                    data_uri: encode_data_uri(&candidate.mime, &bytes),
                });
                self.photo_decoding = false;
            }
            None => {
                self.reject_photo(&PhotoError::Unreadable {
                    name: candidate.name.clone(),
                });
            }
        }
        true
    }

    pub(crate) fn reject_photo(&mut self, error: &PhotoError) {
        console_warn!("[Photo] Rejected: {}", error);
        self.clear_photo();
        self.show_dialog(DialogConfig::photo_rejected(error), DialogFollowUp::None);
    }

    /// Clear the staged photo and file selection. Safe to call with nothing staged.
    pub fn remove_photo(&mut self) {
        if self.photo.is_some() {
            console_info!("[Photo] Removed staged photo");
        }
        self.clear_photo();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::types::PreviewRegion;

    const MIB: u64 = 1024 * 1024;

    fn png(size: u64) -> PhotoCandidate {
        PhotoCandidate::new("photo.png", Some("image/png".to_string()), size)
    }

    #[test]
    fn test_mime_fallback_from_extension() {
        assert_eq!(PhotoCandidate::new("ME.JPG", None, 1).mime, "image/jpeg");
        assert_eq!(PhotoCandidate::new("scan.pdf", Some(String::new()), 1).mime, "application/pdf");
        assert_eq!(PhotoCandidate::new("noext", None, 1).mime, "");
    }

    #[test]
    fn test_unknown_size_is_unreadable() {
        assert_eq!(
            PhotoCandidate::from_reported("me.png", None, None),
            Err(PhotoError::Unreadable {
                name: "me.png".to_string()
            })
        );
        assert_eq!(
            PhotoCandidate::from_reported("me.png", None, Some(5)).map(|c| c.size),
            Ok(5)
        );
    }

    #[test]
    fn test_decoded_bytes_are_checked_against_limit() {
        let mut state = RegistrationState::default();
        let candidate = png(1);
        let token = state.begin_photo_intake(&candidate).unwrap();

        let bytes = vec![0u8; (2 * MIB + 1) as usize];
        assert!(state.finish_photo_decode(token, &candidate, Some(bytes)));

        assert!(state.photo().is_none());
        assert_eq!(state.preview(), PreviewRegion::Placeholder);
        assert_eq!(state.dialog().unwrap().config.title, "File Too Large");
    }

    #[test]
    fn test_disallowed_types_are_rejected() {
        for mime in ["application/pdf", "image/pdf", "image/webp", "text/plain", ""] {
            let mut state = RegistrationState::default();
            let epoch = state.file_input_epoch();
            let candidate = PhotoCandidate::new("file", Some(mime.to_string()), 10);

            let result = state.begin_photo_intake(&candidate);

            assert!(matches!(result, Err(PhotoError::UnsupportedType { .. })), "{}", mime);
            assert!(state.photo().is_none());
            assert_ne!(state.file_input_epoch(), epoch);
            assert_eq!(
                state.dialog().map(|d| d.config.title.as_str()),
                Some("Invalid File Type")
            );
        }
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let config = PhotoConfig::default();
        assert!(check_photo(&png(2 * MIB), &config).is_ok());
        assert_eq!(
            check_photo(&png(2 * MIB + 1), &config),
            Err(PhotoError::TooLarge {
                size: 2 * MIB + 1,
                limit: 2 * MIB
            })
        );
    }

    #[test]
    fn test_oversized_file_shows_size_message() {
        let mut state = RegistrationState::default();
        assert!(state.begin_photo_intake(&png(2 * MIB + 1)).is_err());

        let dialog = state.dialog().unwrap();
        assert_eq!(dialog.config.title, "File Too Large");
        assert!(state.photo().is_none());
    }

    #[test]
    fn test_valid_photo_is_staged_and_previewed() {
        let mut state = RegistrationState::default();
        let candidate = png(3);

        let token = state.begin_photo_intake(&candidate).unwrap();
        assert_eq!(state.preview(), PreviewRegion::Decoding);

        assert!(state.finish_photo_decode(token, &candidate, Some(vec![1, 2, 3])));

        let photo = state.photo().unwrap();
        assert_eq!(photo.data_uri, "data:image/png;base64,AQID");
        assert!(matches!(state.preview(), PreviewRegion::Image { src } if !src.is_empty()));
    }

    #[test]
    fn test_unreadable_file_is_rejected() {
        let mut state = RegistrationState::default();
        let candidate = png(3);
        let token = state.begin_photo_intake(&candidate).unwrap();

        assert!(state.finish_photo_decode(token, &candidate, None));
        assert!(state.photo().is_none());
        assert_eq!(state.preview(), PreviewRegion::Placeholder);
        assert_eq!(state.dialog().unwrap().config.title, "Unreadable File");
    }

    #[test]
    fn test_stale_decode_does_not_clobber_newer_photo() {
        let mut state = RegistrationState::default();
        let first = PhotoCandidate::new("first.png", Some("image/png".into()), 1);
        let second = PhotoCandidate::new("second.gif", Some("image/gif".into()), 1);

        let first_token = state.begin_photo_intake(&first).unwrap();
        let second_token = state.begin_photo_intake(&second).unwrap();

        assert!(state.finish_photo_decode(second_token, &second, Some(vec![7])));
        assert!(!state.finish_photo_decode(first_token, &first, Some(vec![9])));
        assert_eq!(state.photo().unwrap().file_name, "second.gif");
    }

    #[test]
    fn test_removal_during_decode_drops_result() {
        let mut state = RegistrationState::default();
        let candidate = png(1);
        let token = state.begin_photo_intake(&candidate).unwrap();

        state.remove_photo();

        assert!(!state.finish_photo_decode(token, &candidate, Some(vec![1])));
        assert!(state.photo().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut state = RegistrationState::default();
        let candidate = png(1);
        let token = state.begin_photo_intake(&candidate).unwrap();
        state.finish_photo_decode(token, &candidate, Some(vec![1]));

        state.remove_photo();
        let once = (state.photo().cloned(), state.preview());
        state.remove_photo();
        let twice = (state.photo().cloned(), state.preview());

        assert_eq!(once, (None, PreviewRegion::Placeholder));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rejection_clears_previous_photo() {
        let mut state = RegistrationState::default();
        let candidate = png(1);
        let token = state.begin_photo_intake(&candidate).unwrap();
        state.finish_photo_decode(token, &candidate, Some(vec![1]));

        let _ = state.begin_photo_intake(&PhotoCandidate::new("x.txt", None, 1));

        assert!(state.photo().is_none());
    }
}
