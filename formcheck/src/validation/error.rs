//! Validation error types

use thiserror::Error;

/// Message shown when a field is empty or whitespace-only.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown when the terms checkbox is left unchecked on submit.
pub const TERMS_MESSAGE: &str = "You must agree to the terms";

/// Why a single field failed validation.
///
/// Both kinds are the expected output of validation rather than exceptional
/// control flow; the controller turns them into inline error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value was empty after trimming.
    #[error("This field is required")]
    RequiredFieldMissing,

    /// The value was present but failed the field's rule.
    #[error("{message}")]
    FieldRuleViolation { message: &'static str },
}

impl ValidationError {
    /// Creates a rule violation carrying the rule's failure message.
    pub fn rule(message: &'static str) -> Self {
        Self::FieldRuleViolation { message }
    }

    /// The user-visible message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => REQUIRED_MESSAGE,
            Self::FieldRuleViolation { message } => message,
        }
    }
}
