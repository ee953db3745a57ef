//! Form validation rules and results.
//!
//! Field rules are plain functions in [`rules`]; [`check_field`] is the entry
//! point the controller uses for a single field, and [`ValidationResult`]
//! aggregates a full submit.
//!
//! # Example
//!
//! ```
//! use formcheck::FieldId;
//! use formcheck::validation::{ValidationError, check_field, validate_email};
//!
//! assert!(validate_email("a@b.co").is_valid);
//! assert_eq!(
//!     check_field(FieldId::Age, "   ", ""),
//!     Err(ValidationError::RequiredFieldMissing),
//! );
//! ```

mod error;
mod result;
pub mod rules;

pub use error::{REQUIRED_MESSAGE, TERMS_MESSAGE, ValidationError};
pub use result::{ErrorTarget, FieldError, ValidationResult};
pub use rules::{
    Verdict, check_field, validate_age, validate_confirm_password, validate_email,
    validate_name, validate_password, validate_phone,
};
