//! Employee registration form controller
//!
//! The page state lives in a single [`RegistrationState`] owned by the
//! `EmployeeRegistration` component. Synchronous events go through
//! [`RegistrationState::reduce_in_place`]; the gate, photo intake, review modal and
//! submission expose start/finish method pairs so the asynchronous parts can run
//! outside the signal borrow and resume with a [`TaskToken`].
//!
//! - **fields**: the form's fields, their constraints and error display mapping
//! - **constraints**: browser-style constraint validation
//! - **form_validation**: per-field validation and the submission gate
//! - **photo**: photo checks, encoding and the staged photo lifecycle
//! - **review**: the review modal snapshot and its open/close lifecycle
//! - **dialogs**: blocking dialog descriptions
//! - **tasks**: generation tokens for cancellable continuations
//! - **orchestrator**: the async flows tying the above to Dioxus signals

pub mod constraints;
pub mod dialogs;
pub mod fields;
pub mod form_validation;
pub mod orchestrator;
pub mod photo;
pub mod review;
pub mod tasks;
pub mod types;

pub use constraints::*;
pub use dialogs::*;
pub use fields::*;
pub use form_validation::*;
pub use orchestrator::*;
pub use photo::*;
pub use review::*;
pub use tasks::*;
pub use types::*;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Fill every field with a value that passes its constraints; suffix stays empty.
    pub fn fill_valid(state: &mut RegistrationState) {
        let values = [
            (FieldId::LastName, "Dela Cruz"),
            (FieldId::FirstName, "Juan"),
            (FieldId::MiddleName, "Santos"),
            (FieldId::Suffix, ""),
            (FieldId::Gender, "Male"),
            (FieldId::MutualStatus, "Single"),
            (FieldId::PlaceOfBirth, "Quezon City"),
            (FieldId::PermanentAddress, "123 Rizal Street"),
            (FieldId::TemporaryAddress, "45 Mabini Avenue"),
            (FieldId::Province, "Metro Manila"),
            (FieldId::City, "Makati"),
            (FieldId::Barangay, "Poblacion"),
        ];
        for (field, value) in values {
            state.set_value(field, value);
        }
    }

    pub fn staged_photo() -> StagedPhoto {
        StagedPhoto {
            file_name: "juan.png".to_string(),
            mime: "image/png".to_string(),
            data_uri: "data:image/png;base64,AQID".to_string(),
        }
    }
}
