//! Read-only review of the entered data, shown before the final submit.

use crate::registration::fields::FieldId;
use crate::registration::tasks::{TaskKind, TaskToken};
use crate::registration::types::{RegistrationState, ReviewModal};
use crate::utils::or_none;
use crate::{console_debug, console_info};

/// Section titles and the fields they list, top to bottom
pub const REVIEW_LAYOUT: &[(&str, &[FieldId])] = &[
    (
        "Employee Information",
        &[
            FieldId::LastName,
            FieldId::FirstName,
            FieldId::MiddleName,
            FieldId::Suffix,
        ],
    ),
    ("Employee Status", &[FieldId::Gender, FieldId::MutualStatus]),
    (
        "Employee Address",
        &[
            FieldId::PlaceOfBirth,
            FieldId::PermanentAddress,
            FieldId::TemporaryAddress,
        ],
    ),
    (
        "Address Information",
        &[FieldId::Province, FieldId::City, FieldId::Barangay],
    ),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewItem {
    pub field: FieldId,
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewSection {
    pub title: &'static str,
    pub items: Vec<ReviewItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewSnapshot {
    /// Data URI of the staged photo, if any
    pub photo: Option<String>,
    pub sections: Vec<ReviewSection>,
}

impl ReviewSnapshot {
    pub fn capture(state: &RegistrationState) -> Self {
        let sections = REVIEW_LAYOUT
            .iter()
            .map(|&(title, fields)| ReviewSection {
                title,
                items: fields
                    .iter()
                    .map(|field| ReviewItem {
                        field: *field,
                        label: field.label(),
                        value: display_value(state, *field),
                    })
                    .collect(),
            })
            .collect();

        Self {
            photo: state.photo().map(|photo| photo.data_uri.clone()),
            sections,
        }
    }

    pub fn value(&self, field: FieldId) -> Option<&str> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter())
            .find(|item| item.field == field)
            .map(|item| item.value.as_str())
    }
}

fn display_value(state: &RegistrationState, field: FieldId) -> String {
    let value = state.value(field);
    match field {
        FieldId::Suffix => or_none(value),
        _ => value.to_string(),
    }
}

impl RegistrationState {
    /// Snapshot the form into the review modal.
    pub fn open_review(&mut self) {
        // A teardown still pending from a previous close must not remove this one
        self.tasks.invalidate(TaskKind::ModalTeardown);
        self.review = ReviewModal::Open(ReviewSnapshot::capture(self));
        console_info!("[Review] Opened details preview");
    }

    /// Start the closing animation. Returns the teardown token, or `None` if the modal
    /// was not open.
    pub fn begin_close_review(&mut self) -> Option<TaskToken> {
        match std::mem::take(&mut self.review) {
            ReviewModal::Open(snapshot) => {
                self.review = ReviewModal::Closing(snapshot);
                Some(self.tasks.begin(TaskKind::ModalTeardown))
            }
            other => {
                self.review = other;
                None
            }
        }
    }

    /// Remove the modal once the closing animation has run.
    pub fn finish_close_review(&mut self, token: TaskToken) -> bool {
        if !self.tasks.is_current(token) {
            console_debug!("[Review] Dropping stale teardown");
            return false;
        }

        if matches!(self.review, ReviewModal::Closing(_)) {
            self.review = ReviewModal::Closed;
            return true;
        }
        false
    }
}
