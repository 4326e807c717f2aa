use crate::registration::FieldValidation;

pub fn validation_class(validation: &FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "form-control is-valid",
        FieldValidation::Invalid(_) => "form-control is-invalid",
        FieldValidation::Untouched => "form-control",
    }
}

pub fn validation_message(validation: &FieldValidation) -> &str {
    match validation {
        FieldValidation::Invalid(message) => message,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let valid = validation_class(&FieldValidation::Valid);
        let invalid = validation_class(&FieldValidation::Invalid("x".to_string()));
        let untouched = validation_class(&FieldValidation::Untouched);

        assert!(valid.contains("is-valid") && !valid.contains("is-invalid"));
        assert!(invalid.contains("is-invalid") && !invalid.contains("is-valid"));
        assert!(!untouched.contains("is-valid") && !untouched.contains("is-invalid"));
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(validation_message(&FieldValidation::Valid), "");
        assert_eq!(
            validation_message(&FieldValidation::Invalid("This field is required.".into())),
            "This field is required."
        );
    }
}
