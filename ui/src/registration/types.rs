// Core types for the registration form - no dioxus imports needed here
use std::collections::BTreeMap;

use serde::Serialize;

use crate::registration::dialogs::{ActiveDialog, DialogConfig, DialogFollowUp};
use crate::registration::fields::{ErrorDisplayMap, FieldId, FIELD_SPECS};
use crate::registration::review::ReviewSnapshot;
use crate::registration::tasks::{TaskGenerations, TaskKind};
use crate::services::config::RegistrationConfig;
use crate::{console_debug, console_info};

/// Per-field validation outcome
#[derive(Clone, PartialEq, Debug, Default)]
pub enum FieldValidation {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldValidation {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldValidation::Invalid(_))
    }
}

/// A decoded photo waiting to be attached to the registration
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct StagedPhoto {
    pub file_name: String,
    pub mime: String,
    pub data_uri: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ReviewModal {
    #[default]
    Closed,
    Open(ReviewSnapshot),
    /// Playing the closing animation; removed once teardown fires
    Closing(ReviewSnapshot),
}

impl ReviewModal {
    pub fn snapshot(&self) -> Option<&ReviewSnapshot> {
        match self {
            ReviewModal::Open(snapshot) | ReviewModal::Closing(snapshot) => Some(snapshot),
            ReviewModal::Closed => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SubmitControl {
    pub busy: bool,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        if self.busy {
            "Processing..."
        } else {
            "Submit Registration"
        }
    }
}

/// What the photo preview region currently shows
#[derive(Clone, PartialEq, Debug)]
pub enum PreviewRegion {
    Placeholder,
    Decoding,
    Image { src: String },
}

/// Snapshot of the form handed to a registration sink
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RegistrationRecord {
    pub values: Vec<(FieldId, String)>,
    pub photo: Option<StagedPhoto>,
}

impl RegistrationRecord {
    pub fn value(&self, field: FieldId) -> &str {
        self.values
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.value(FieldId::FirstName).trim(),
            self.value(FieldId::LastName).trim()
        )
        .trim()
        .to_string()
    }
}

// Action enum for synchronous state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    /// Input event: store the value and revalidate
    SetFieldValue(FieldId, String),
    /// Blur event: revalidate without changing the value
    BlurField(FieldId),
    RemovePhoto,
    ResetForm,
    DismissDialog,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RegistrationState {
    pub(crate) values: BTreeMap<FieldId, String>,
    pub(crate) validations: BTreeMap<FieldId, FieldValidation>,
    pub(crate) photo: Option<StagedPhoto>,
    pub(crate) photo_decoding: bool,
    /// Bumped to re-mount (and thereby clear) the file input
    pub(crate) file_input_epoch: u32,
    pub(crate) review: ReviewModal,
    pub(crate) submit: SubmitControl,
    pub(crate) dialog: Option<ActiveDialog>,
    pub(crate) tasks: TaskGenerations,
    pub(crate) error_displays: ErrorDisplayMap,
    pub(crate) config: RegistrationConfig,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new(RegistrationConfig::default())
    }
}

impl RegistrationState {
    pub fn new(config: RegistrationConfig) -> Self {
        Self {
            values: FieldId::ALL
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
            validations: BTreeMap::new(),
            photo: None,
            photo_decoding: false,
            file_input_epoch: 0,
            review: ReviewModal::Closed,
            submit: SubmitControl::default(),
            dialog: None,
            tasks: TaskGenerations::default(),
            error_displays: ErrorDisplayMap::from_specs(&FIELD_SPECS),
            config,
        }
    }

    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::SetFieldValue(field, value) => {
                self.set_value(field, value);
                if field.spec().is_required() {
                    self.validate_field(field);
                }
            }
            RegistrationAction::BlurField(field) => {
                if field.spec().is_required() {
                    self.validate_field(field);
                }
            }
            RegistrationAction::RemovePhoto => {
                self.remove_photo();
            }
            RegistrationAction::ResetForm => {
                self.reset();
            }
            RegistrationAction::DismissDialog => {
                if let Some(dialog) = self.dialog.take() {
                    match dialog.follow_up {
                        DialogFollowUp::None => {}
                        DialogFollowUp::ResetAfterSubmission => self.reset(),
                    }
                }
            }
        }
    }

    /// Restore the page to its initial state.
    ///
    /// Values return to their defaults, every validation flag and message is cleared,
    /// the staged photo and file selection are dropped, the modal is torn down and any
    /// in-flight decode or submission continuation becomes stale.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.validations.clear();
        self.clear_photo();
        self.review = ReviewModal::Closed;
        self.submit = SubmitControl::default();
        self.tasks.invalidate(TaskKind::Submission);
        self.tasks.invalidate(TaskKind::ModalTeardown);
        console_info!("[Registration] Form reset");
    }

    pub(crate) fn clear_photo(&mut self) {
        self.photo = None;
        self.photo_decoding = false;
        self.file_input_epoch = self.file_input_epoch.wrapping_add(1);
        self.tasks.invalidate(TaskKind::PhotoDecode);
    }

    /// Show a dialog, replacing the current one unless that one still has to reset the
    /// form when dismissed.
    pub(crate) fn show_dialog(&mut self, config: DialogConfig, follow_up: DialogFollowUp) {
        if let Some(active) = &self.dialog {
            if active.follow_up == DialogFollowUp::ResetAfterSubmission
                && follow_up != DialogFollowUp::ResetAfterSubmission
            {
                console_debug!(
                    "[Registration] Keeping '{}' over '{}'",
                    active.config.title,
                    config.title
                );
                return;
            }
        }

        console_debug!("[Registration] Showing dialog '{}'", config.title);
        self.dialog = Some(ActiveDialog { config, follow_up });
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn validation(&self, field: FieldId) -> &FieldValidation {
        static UNTOUCHED: FieldValidation = FieldValidation::Untouched;
        self.validations.get(&field).unwrap_or(&UNTOUCHED)
    }

    /// Message for the field's `<id>-error` element, `None` when the field has no such element
    pub fn error_message(&self, field: FieldId) -> Option<&str> {
        self.error_displays.get(field)?;
        Some(match self.validation(field) {
            FieldValidation::Invalid(message) => message.as_str(),
            _ => "",
        })
    }

    pub fn error_displays(&self) -> &ErrorDisplayMap {
        &self.error_displays
    }

    pub fn photo(&self) -> Option<&StagedPhoto> {
        self.photo.as_ref()
    }

    pub fn preview(&self) -> PreviewRegion {
        match (&self.photo, self.photo_decoding) {
            (Some(photo), _) => PreviewRegion::Image {
                src: photo.data_uri.clone(),
            },
            (None, true) => PreviewRegion::Decoding,
            (None, false) => PreviewRegion::Placeholder,
        }
    }

    pub fn file_input_epoch(&self) -> u32 {
        self.file_input_epoch
    }

    pub fn review(&self) -> &ReviewModal {
        &self.review
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit
    }

    pub fn dialog(&self) -> Option<&ActiveDialog> {
        self.dialog.as_ref()
    }

    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    pub fn record(&self) -> RegistrationRecord {
        RegistrationRecord {
            values: FieldId::ALL
                .into_iter()
                .map(|field| (field, self.value(field).to_string()))
                .collect(),
            photo: self.photo.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::test_support::{fill_valid, staged_photo};

    #[test]
    fn test_input_revalidates_required_field() {
        let mut state = RegistrationState::default();

        state.reduce_in_place(RegistrationAction::SetFieldValue(FieldId::LastName, "".into()));
        assert!(state.validation(FieldId::LastName).is_invalid());

        // An invalid field turns valid mid-typing, without waiting for blur
        state.reduce_in_place(RegistrationAction::SetFieldValue(FieldId::LastName, "D".into()));
        assert_eq!(state.validation(FieldId::LastName), &FieldValidation::Valid);
    }

    #[test]
    fn test_blur_validates_untouched_field() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::BlurField(FieldId::City));

        assert_eq!(state.error_message(FieldId::City), Some("This field is required."));
    }

    #[test]
    fn test_optional_field_is_never_flagged() {
        let mut state = RegistrationState::default();
        state.reduce_in_place(RegistrationAction::SetFieldValue(FieldId::Suffix, "".into()));
        state.reduce_in_place(RegistrationAction::BlurField(FieldId::Suffix));

        assert_eq!(state.validation(FieldId::Suffix), &FieldValidation::Untouched);
        assert_eq!(state.error_message(FieldId::Suffix), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        state.reduce_in_place(RegistrationAction::SetFieldValue(FieldId::City, "".into()));
        state.photo = Some(staged_photo());
        let epoch = state.file_input_epoch();

        state.reduce_in_place(RegistrationAction::ResetForm);

        for field in FieldId::ALL {
            assert_eq!(state.validation(field), &FieldValidation::Untouched);
            assert_eq!(state.value(field), "");
            if let Some(message) = state.error_message(field) {
                assert!(message.is_empty());
            }
        }
        assert!(state.photo().is_none());
        assert_eq!(state.preview(), PreviewRegion::Placeholder);
        assert_ne!(state.file_input_epoch(), epoch);
    }

    #[test]
    fn test_dismiss_plain_dialog_keeps_form() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        state.show_dialog(
            DialogConfig::registration_successful(None),
            DialogFollowUp::None,
        );

        state.reduce_in_place(RegistrationAction::DismissDialog);

        assert!(state.dialog().is_none());
        assert_eq!(state.value(FieldId::FirstName), "Juan");
    }

    #[test]
    fn test_record_display_name() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        let record = state.record();

        assert_eq!(record.display_name(), "Juan Dela Cruz");
        assert_eq!(record.values.len(), FieldId::ALL.len());
        assert_eq!(record.value(FieldId::Suffix), "");
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(SubmitControl { busy: false }.label(), "Submit Registration");
        assert_eq!(SubmitControl { busy: true }.label(), "Processing...");
    }
}
