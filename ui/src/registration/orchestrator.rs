//! Asynchronous registration flows
//!
//! Each flow follows the same shape: start a task on the state (which hands back a
//! [`TaskToken`]), await the slow part outside the signal borrow, then resume on the
//! state with the token so a superseded continuation is dropped instead of applied.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::registration::dialogs::{DialogConfig, DialogFollowUp};
use crate::registration::photo::PhotoCandidate;
use crate::registration::tasks::{TaskKind, TaskToken};
use crate::registration::types::{RegistrationRecord, RegistrationState};
use crate::services::errors::RegistrationResult;
use crate::services::submission::{RegistrationSink, SubmissionReceipt};
use crate::utils::{native_file_mime, sleep_ms};
use crate::{console_debug, console_error, console_info, console_warn};

impl RegistrationState {
    /// Put the submit control into its busy state and hand out the record to send.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<(TaskToken, RegistrationRecord)> {
        if self.submit.busy {
            console_warn!("[Submit] Ignoring submit while a submission is in flight");
            return None;
        }

        self.submit.busy = true;
        let token = self.tasks.begin(TaskKind::Submission);
        Some((token, self.record()))
    }

    /// Show the outcome of a submission if `token` is still current.
    ///
    /// Success shows the confirmation dialog; confirming it resets the form. A failure
    /// restores the submit control and leaves the entered data alone.
    pub fn complete_submission(
        &mut self,
        token: TaskToken,
        result: RegistrationResult<SubmissionReceipt>,
    ) -> bool {
        if !self.tasks.is_current(token) {
            console_debug!("[Submit] Dropping stale submission result");
            return false;
        }

        match result {
            Ok(receipt) => {
                console_info!("[Submit] Registered {}", receipt.employee_name);
                let photo = self.photo.as_ref().map(|photo| photo.data_uri.clone());
                self.show_dialog(
                    DialogConfig::registration_successful(photo),
                    DialogFollowUp::ResetAfterSubmission,
                );
            }
            Err(error) => {
                console_error!("[Submit] Submission failed: {}", error);
                self.submit.busy = false;
                self.show_dialog(DialogConfig::submission_failed(&error), DialogFollowUp::None);
            }
        }
        true
    }

    /// "Confirm and Submit" in the review modal: close the modal and go straight to the
    /// submission, without validating again.
    pub fn confirm_review(&mut self) -> (Option<TaskToken>, Option<(TaskToken, RegistrationRecord)>) {
        let teardown = self.begin_close_review();
        (teardown, self.begin_submission())
    }
}

/// Send the current form through `sink` and report the outcome.
pub async fn submit_registration(
    mut state: Signal<RegistrationState>,
    sink: Rc<dyn RegistrationSink>,
) {
    let Some((token, record)) = state.with_mut(|s| s.begin_submission()) else {
        return;
    };
    run_submission(state, sink, token, record).await;
}

pub async fn run_submission(
    mut state: Signal<RegistrationState>,
    sink: Rc<dyn RegistrationSink>,
    token: TaskToken,
    record: RegistrationRecord,
) {
    console_debug!("[Submit] Sending through {}", sink.name());
    let result = sink.submit(record).await;
    state.with_mut(|s| s.complete_submission(token, result));
}

/// Remove the review modal after its closing animation.
pub async fn teardown_review(mut state: Signal<RegistrationState>, token: TaskToken) {
    let delay = state.peek().config().timing.modal_close_ms;
    sleep_ms(delay).await;
    state.with_mut(|s| s.finish_close_review(token));
}

/// Close the review modal with its animation.
pub async fn close_review(mut state: Signal<RegistrationState>) {
    if let Some(token) = state.with_mut(|s| s.begin_close_review()) {
        teardown_review(state, token).await;
    }
}

/// Validate and decode the first file of a file input change.
pub async fn intake_photo(mut state: Signal<RegistrationState>, files: Arc<dyn FileEngine>) {
    let Some(name) = files.files().into_iter().next() else {
        return;
    };

    let size = files.file_size(&name).await;
    let reported_mime = match files.get_native_file(&name).await {
        Some(native) => native_file_mime(native),
        None => None,
    };
    let candidate = match PhotoCandidate::from_reported(name, reported_mime, size) {
        Ok(candidate) => candidate,
        Err(error) => {
            state.with_mut(|s| s.reject_photo(&error));
            return;
        }
    };

    let Ok(token) = state.with_mut(|s| s.begin_photo_intake(&candidate)) else {
        return;
    };

    let bytes = files.read_file(&candidate.name).await;
    state.with_mut(|s| s.finish_photo_decode(token, &candidate, bytes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::form_validation::{GateEntry, GateOutcome};
    use crate::registration::test_support::{fill_valid, staged_photo};
    use crate::registration::types::{FieldValidation, PreviewRegion, ReviewModal};
    use crate::registration::{DialogBody, FieldId, RegistrationAction};
    use crate::services::errors::RegistrationError;
    use crate::services::submission::SimulatedSink;

    async fn submit_with(state: &mut RegistrationState, sink: &SimulatedSink) -> bool {
        let (token, record) = state.begin_submission().unwrap();
        let result = sink.submit(record).await;
        state.complete_submission(token, result)
    }

    fn assert_initial(state: &RegistrationState) {
        for field in FieldId::ALL {
            assert_eq!(state.value(field), "");
            assert_eq!(state.validation(field), &FieldValidation::Untouched);
        }
        assert!(state.photo().is_none());
        assert_eq!(state.preview(), PreviewRegion::Placeholder);
        assert!(!state.submit_control().busy);
        assert_eq!(state.review(), &ReviewModal::Closed);
    }

    #[tokio::test]
    async fn test_direct_submit_then_dismiss_resets() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        state.photo = Some(staged_photo());

        assert_eq!(state.run_gate(GateEntry::Submit), GateOutcome::Passed);
        assert!(submit_with(&mut state, &SimulatedSink::new(0)).await);

        let dialog = state.dialog().unwrap().clone();
        assert_eq!(dialog.config.title, "Registration Successful!");
        assert_eq!(dialog.follow_up, DialogFollowUp::ResetAfterSubmission);
        assert!(matches!(
            dialog.config.body,
            DialogBody::Registered { photo: Some(_), .. }
        ));
        assert!(state.submit_control().busy);

        state.reduce_in_place(RegistrationAction::DismissDialog);
        assert!(state.dialog().is_none());
        assert_initial(&state);
    }

    #[tokio::test]
    async fn test_confirm_review_matches_direct_submit() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        assert_eq!(state.run_gate(GateEntry::ViewDetails), GateOutcome::Passed);

        let (teardown, submission) = state.confirm_review();
        let teardown = teardown.unwrap();
        let (token, record) = submission.unwrap();
        assert!(state.submit_control().busy);
        assert_eq!(record, state.record());

        assert!(state.finish_close_review(teardown));
        let result = SimulatedSink::new(0).submit(record).await;
        assert!(state.complete_submission(token, result));
        assert_eq!(
            state.dialog().map(|d| d.config.title.as_str()),
            Some("Registration Successful!")
        );

        state.reduce_in_place(RegistrationAction::DismissDialog);
        assert_initial(&state);
    }

    #[test]
    fn test_second_submit_while_busy_is_ignored() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);

        assert!(state.begin_submission().is_some());
        assert!(state.begin_submission().is_none());
    }

    #[tokio::test]
    async fn test_reset_mid_delay_drops_result() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        let (token, record) = state.begin_submission().unwrap();

        state.reduce_in_place(RegistrationAction::ResetForm);
        assert!(!state.submit_control().busy);

        fill_valid(&mut state);
        let result = SimulatedSink::new(0).submit(record).await;
        assert!(!state.complete_submission(token, result));
        assert!(state.dialog().is_none());
        assert_eq!(state.value(FieldId::FirstName), "Juan");
    }

    #[tokio::test]
    async fn test_late_photo_failure_keeps_success_dialog() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        let candidate = PhotoCandidate::new("late.png", Some("image/png".into()), 3);
        let decode = state.begin_photo_intake(&candidate).unwrap();

        assert!(submit_with(&mut state, &SimulatedSink::new(0)).await);
        assert!(state.finish_photo_decode(decode, &candidate, None));

        let dialog = state.dialog().unwrap();
        assert_eq!(dialog.config.title, "Registration Successful!");
        assert_eq!(dialog.follow_up, DialogFollowUp::ResetAfterSubmission);

        state.reduce_in_place(RegistrationAction::DismissDialog);
        assert!(state.dialog().is_none());
        assert_initial(&state);
    }

    #[test]
    fn test_failed_submission_keeps_data() {
        let mut state = RegistrationState::default();
        fill_valid(&mut state);
        let (token, _) = state.begin_submission().unwrap();

        let error = RegistrationError::Submission {
            message: "endpoint unavailable".to_string(),
        };
        assert!(state.complete_submission(token, Err(error)));

        assert!(!state.submit_control().busy);
        assert_eq!(state.dialog().unwrap().config.title, "Submission Failed");

        state.reduce_in_place(RegistrationAction::DismissDialog);
        assert_eq!(state.value(FieldId::LastName), "Dela Cruz");
    }
}
