//! Constraint validation modelled on the browser's `ValidityState`.
//!
//! Only the constraints the registration form declares are supported: required,
//! pattern and length bounds. Patterns use HTML `pattern` attribute semantics, i.e. they
//! must match the whole value. Lengths are counted in UTF-16 code units like the
//! browser's `minlength` and `maxlength`.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

use regex::Regex;

use crate::console_error;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Select,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Select => "select-one",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    pub required: bool,
    pub input_type: InputType,
    pub pattern: Option<&'static str>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Constraints {
    pub const fn required_text() -> Self {
        Self {
            required: true,
            input_type: InputType::Text,
            pattern: None,
            min_length: None,
            max_length: None,
        }
    }
}

/// Which constraints a value violates. Several flags may be set at once.
///
/// `type_mismatch` stays false for the form's text and select controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_short
            || self.too_long)
    }
}

/// Length as the browser measures it for `minlength` and `maxlength`
pub fn html_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Only an empty value is missing; whitespace counts as content.
pub fn check_validity(constraints: &Constraints, value: &str) -> ValidityState {
    if value.is_empty() {
        return ValidityState {
            value_missing: constraints.required,
            ..ValidityState::default()
        };
    }

    let length = html_length(value);

    ValidityState {
        value_missing: false,
        type_mismatch: false,
        pattern_mismatch: constraints
            .pattern
            .is_some_and(|pattern| !matches_whole(pattern, value)),
        too_short: constraints.min_length.is_some_and(|min| length < min),
        too_long: constraints.max_length.is_some_and(|max| length > max),
    }
}

/// The message the browser would report for `validity`, `None` when valid.
pub fn native_message(constraints: &Constraints, validity: &ValidityState, value: &str) -> Option<String> {
    let length = html_length(value);

    if validity.value_missing {
        Some(match constraints.input_type {
            InputType::Select => "Please select an item in the list.".to_string(),
            _ => "Please fill out this field.".to_string(),
        })
    } else if validity.pattern_mismatch {
        Some("Please match the requested format.".to_string())
    } else if validity.too_short {
        Some(format!(
            "Please lengthen this text to {} characters or more (you are currently using {} characters).",
            constraints.min_length.unwrap_or_default(),
            length
        ))
    } else if validity.too_long {
        Some(format!(
            "Please shorten this text to {} characters or less (you are currently using {} characters).",
            constraints.max_length.unwrap_or_default(),
            length
        ))
    } else {
        None
    }
}

type PatternCache = Mutex<HashMap<&'static str, Option<Regex>>>;

fn pattern_cache() -> &'static PatternCache {
    static CACHE: OnceLock<PatternCache> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn matches_whole(pattern: &'static str, value: &str) -> bool {
    // The map only ever gains fully built entries, so a poisoned guard is still usable
    let mut cache = pattern_cache()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let compiled = cache.entry(pattern).or_insert_with(|| {
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(regex) => Some(regex),
            Err(e) => {
                // Browsers ignore an invalid pattern attribute
                console_error!("Ignoring invalid pattern '{}': {}", pattern, e);
                None
            }
        }
    });

    compiled.as_ref().map_or(true, |regex| regex.is_match(value))
}
