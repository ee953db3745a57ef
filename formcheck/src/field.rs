//! Field identifiers and per-field display state.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the registration form's validated inputs.
///
/// Variants are declared in document order; [`FieldId::ALL`] preserves it and
/// submit-time evaluation walks fields in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Age,
}

impl FieldId {
    /// Number of validated fields.
    pub const COUNT: usize = 6;

    /// Every field, in document order.
    pub const ALL: [FieldId; Self::COUNT] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Age,
    ];

    /// The element identifier used by the page for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Age => "age",
        }
    }

    /// Position of this field in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field '{0}'")]
pub struct ParseFieldError(pub String);

impl FromStr for FieldId {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Observable validation state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldState {
    /// Not evaluated since the last focus or reset.
    #[default]
    Pristine,
    /// Last evaluation failed with this message.
    Invalid(String),
    /// Last evaluation passed.
    Valid,
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The error message currently shown for the field, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}
