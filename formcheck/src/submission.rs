use serde::Serialize;

use crate::field::FieldId;
use crate::surface::Surface;

/// The values reported when a submit succeeds.
///
/// Passwords are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
}

impl Submission {
    /// Read the raw field values off a surface.
    pub fn capture<S: Surface + ?Sized>(surface: &S) -> Self {
        Self {
            full_name: surface.read_value(FieldId::FullName),
            email: surface.read_value(FieldId::Email),
            phone: surface.read_value(FieldId::Phone),
            age: surface.read_value(FieldId::Age),
        }
    }
}
