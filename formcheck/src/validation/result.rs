use crate::field::FieldId;

use super::error::ValidationError;

/// What a submit-time error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTarget {
    /// One of the validated inputs.
    Field(FieldId),
    /// The terms-acceptance checkbox.
    Terms,
}

/// Information about a single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Where the error is displayed.
    pub target: ErrorTarget,
    /// Why validation failed.
    pub error: ValidationError,
}

impl FieldError {
    pub fn field(field: FieldId, error: ValidationError) -> Self {
        Self {
            target: ErrorTarget::Field(field),
            error,
        }
    }

    pub fn terms(error: ValidationError) -> Self {
        Self {
            target: ErrorTarget::Terms,
            error,
        }
    }

    /// Error message.
    pub fn message(&self) -> &'static str {
        self.error.message()
    }
}

/// Result of validating the whole form on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed and the terms were accepted.
    #[default]
    Valid,
    /// One or more checks failed, in field order with the terms check last.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The first failing input field, skipping the terms checkbox.
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.errors().iter().find_map(|e| match e.target {
            ErrorTarget::Field(field) => Some(field),
            ErrorTarget::Terms => None,
        })
    }

    /// The error reported for `target`, if it failed.
    pub fn error_for(&self, target: ErrorTarget) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.target == target)
    }
}
