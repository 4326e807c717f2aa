use crate::registration::constraints::{check_validity, native_message, ValidityState};
use crate::registration::dialogs::{DialogConfig, DialogFollowUp};
use crate::registration::fields::{required_fields, FieldId};
use crate::registration::types::{FieldValidation, RegistrationState};
use crate::services::errors::RegistrationError;
use crate::{console_debug, console_warn};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_VALUE_MESSAGE: &str = "Please enter a valid value.";

/// Where a full-form validation pass was requested from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEntry {
    ViewDetails,
    Submit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Passed,
    /// At least one required field failed; `first_invalid` is where to scroll
    Blocked {
        invalid: Vec<FieldId>,
        first_invalid: Option<FieldId>,
    },
}

/// Message shown under a field that failed validation
pub fn error_message_for(validity: &ValidityState, native: Option<String>) -> String {
    if validity.value_missing {
        REQUIRED_MESSAGE.to_string()
    } else if validity.type_mismatch {
        INVALID_VALUE_MESSAGE.to_string()
    } else {
        native.unwrap_or_default()
    }
}

impl RegistrationState {
    /// Validate one field, updating its flag and message. Returns whether it is valid.
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let constraints = &field.spec().constraints;
        let value = self.value(field);
        let validity = check_validity(constraints, value);

        let outcome = if validity.valid() {
            FieldValidation::Valid
        } else {
            let native = native_message(constraints, &validity, value);
            FieldValidation::Invalid(error_message_for(&validity, native))
        };

        let is_valid = outcome == FieldValidation::Valid;
        self.validations.insert(field, outcome);
        is_valid
    }

    /// Validate every required field without stopping at the first failure, so all
    /// error displays update in one pass. Returns the fields that failed.
    pub fn validate_required(&mut self) -> Vec<FieldId> {
        required_fields()
            .filter(|field| !self.validate_field(*field))
            .collect()
    }

    /// First field in document order currently flagged invalid
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|field| self.validation(*field).is_invalid())
    }

    pub fn all_required_valid(&self) -> bool {
        required_fields().all(|field| self.validation(field) == &FieldValidation::Valid)
    }

    /// Shared gate for "View Details" and form submission.
    ///
    /// On success the "View Details" path opens the review modal; the submit path is
    /// left to the caller, which starts the asynchronous submission. On failure the
    /// validation dialog is shown.
    pub fn run_gate(&mut self, entry: GateEntry) -> GateOutcome {
        let invalid = self.validate_required();

        if invalid.is_empty() {
            console_debug!("[Registration] Gate passed for {:?}", entry);
            if entry == GateEntry::ViewDetails {
                self.open_review();
            }
            return GateOutcome::Passed;
        }

        let first_invalid = self.first_invalid();
        if let Some(first) = first_invalid {
            let error = RegistrationError::Validation {
                invalid_count: invalid.len(),
                first,
            };
            console_warn!("[Registration] Gate blocked for {:?}: {}", entry, error);
        }
        self.show_dialog(DialogConfig::validation_failed(entry), DialogFollowUp::None);

        GateOutcome::Blocked {
            invalid,
            first_invalid,
        }
    }
}
