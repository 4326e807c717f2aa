//! The registration form's fields, in document order.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::registration::constraints::{Constraints, InputType};
use crate::services::errors::{RegistrationError, RegistrationResult};

/// Letters (any script), spaces, periods, apostrophes and hyphens
pub const NAME_PATTERN: &str = r"[\p{L} .'\-]+";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FieldId {
    LastName,
    FirstName,
    MiddleName,
    Suffix,
    Gender,
    MutualStatus,
    PlaceOfBirth,
    PermanentAddress,
    TemporaryAddress,
    Province,
    City,
    Barangay,
}

impl FieldId {
    /// Every field in document order
    pub const ALL: [FieldId; 12] = [
        FieldId::LastName,
        FieldId::FirstName,
        FieldId::MiddleName,
        FieldId::Suffix,
        FieldId::Gender,
        FieldId::MutualStatus,
        FieldId::PlaceOfBirth,
        FieldId::PermanentAddress,
        FieldId::TemporaryAddress,
        FieldId::Province,
        FieldId::City,
        FieldId::Barangay,
    ];

    /// DOM id of the field's control
    pub fn id(&self) -> &'static str {
        match self {
            FieldId::LastName => "lname",
            FieldId::FirstName => "fname",
            FieldId::MiddleName => "mname",
            FieldId::Suffix => "suffix",
            FieldId::Gender => "user_gender",
            FieldId::MutualStatus => "mutual_status",
            FieldId::PlaceOfBirth => "place_birth",
            FieldId::PermanentAddress => "permanent",
            FieldId::TemporaryAddress => "temporary",
            FieldId::Province => "province",
            FieldId::City => "city",
            FieldId::Barangay => "barangay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::LastName => "Last Name",
            FieldId::FirstName => "First Name",
            FieldId::MiddleName => "Middle Name",
            FieldId::Suffix => "Suffix",
            FieldId::Gender => "Gender",
            FieldId::MutualStatus => "Mutual Status",
            FieldId::PlaceOfBirth => "Place Birth",
            FieldId::PermanentAddress => "Permanent Address",
            FieldId::TemporaryAddress => "Temporary Address",
            FieldId::Province => "Province",
            FieldId::City => "City",
            FieldId::Barangay => "Barangay",
        }
    }

    pub fn from_id(id: &str) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn spec(&self) -> &'static FieldSpec {
        // FIELD_SPECS is declared in the same order as FieldId::ALL
        &FIELD_SPECS[*self as usize]
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text { placeholder: &'static str },
    Select { options: &'static [&'static str] },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub field: FieldId,
    pub kind: FieldKind,
    pub constraints: Constraints,
    /// Whether the page renders a `<id>-error` element for this field
    pub error_display: bool,
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        self.constraints.required
    }
}

pub const SUFFIX_OPTIONS: &[&str] = &["", "Jr.", "Sr.", "II", "III", "IV"];
pub const GENDER_OPTIONS: &[&str] = &["", "Male", "Female"];
pub const MUTUAL_STATUS_OPTIONS: &[&str] = &["", "Single", "Married", "Widowed", "Separated"];

const fn text(
    field: FieldId,
    placeholder: &'static str,
    pattern: Option<&'static str>,
    min_length: Option<usize>,
    max_length: usize,
) -> FieldSpec {
    FieldSpec {
        field,
        kind: FieldKind::Text { placeholder },
        constraints: Constraints {
            required: true,
            input_type: InputType::Text,
            pattern,
            min_length,
            max_length: Some(max_length),
        },
        error_display: true,
    }
}

const fn select(field: FieldId, options: &'static [&'static str], required: bool) -> FieldSpec {
    FieldSpec {
        field,
        kind: FieldKind::Select { options },
        constraints: Constraints {
            required,
            input_type: InputType::Select,
            pattern: None,
            min_length: None,
            max_length: None,
        },
        error_display: required,
    }
}

pub static FIELD_SPECS: [FieldSpec; 12] = [
    text(FieldId::LastName, "Last name", Some(NAME_PATTERN), None, 50),
    text(FieldId::FirstName, "First name", Some(NAME_PATTERN), None, 50),
    text(FieldId::MiddleName, "Middle name", Some(NAME_PATTERN), None, 50),
    select(FieldId::Suffix, SUFFIX_OPTIONS, false),
    select(FieldId::Gender, GENDER_OPTIONS, true),
    select(FieldId::MutualStatus, MUTUAL_STATUS_OPTIONS, true),
    text(FieldId::PlaceOfBirth, "City or municipality of birth", None, Some(2), 100),
    text(FieldId::PermanentAddress, "House no., street", None, Some(5), 150),
    text(FieldId::TemporaryAddress, "House no., street", None, Some(5), 150),
    text(FieldId::Province, "Province", Some(NAME_PATTERN), None, 60),
    text(FieldId::City, "City or municipality", Some(NAME_PATTERN), None, 60),
    text(FieldId::Barangay, "Barangay", None, None, 60),
];

/// The required fields, in document order
pub fn required_fields() -> impl Iterator<Item = FieldId> {
    FIELD_SPECS
        .iter()
        .filter(|spec| spec.is_required())
        .map(|spec| spec.field)
}

/// Typed handle to a field's error display element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplayId(String);

impl ErrorDisplayId {
    pub fn for_field(field: FieldId) -> Self {
        Self(format!("{}-error", field.id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Field to error display mapping, built once from the field table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorDisplayMap {
    entries: BTreeMap<FieldId, ErrorDisplayId>,
}

impl ErrorDisplayMap {
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        let entries = specs
            .iter()
            .filter(|spec| spec.error_display)
            .map(|spec| (spec.field, ErrorDisplayId::for_field(spec.field)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, field: FieldId) -> Option<&ErrorDisplayId> {
        self.entries.get(&field)
    }

    /// Check the mapping against the field table it was built from.
    ///
    /// Every field may appear at most once in the table, displays belong to required
    /// fields only, and each display id follows the `<id>-error` convention.
    pub fn validate(&self, specs: &[FieldSpec]) -> RegistrationResult<()> {
        let mut seen = BTreeMap::new();
        for spec in specs {
            if seen.insert(spec.field, ()).is_some() {
                return Err(RegistrationError::Configuration {
                    field: spec.field.to_string(),
                    message: "field declared more than once".to_string(),
                });
            }
        }

        for (field, display) in &self.entries {
            let Some(spec) = specs.iter().find(|spec| spec.field == *field) else {
                return Err(RegistrationError::Configuration {
                    field: field.to_string(),
                    message: "error display for an undeclared field".to_string(),
                });
            };

            if !spec.is_required() {
                return Err(RegistrationError::Configuration {
                    field: field.to_string(),
                    message: "error display on an optional field".to_string(),
                });
            }

            if *display != ErrorDisplayId::for_field(*field) {
                return Err(RegistrationError::Configuration {
                    field: field.to_string(),
                    message: format!("unexpected error display id '{}'", display.as_str()),
                });
            }
        }

        Ok(())
    }
}
