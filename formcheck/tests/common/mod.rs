#![allow(dead_code)]

use formcheck::FieldId;
use formcheck::surface::MemorySurface;

/// Values that pass every field rule.
pub const VALID_VALUES: [(FieldId, &str); FieldId::COUNT] = [
    (FieldId::FullName, "Ada Lovelace"),
    (FieldId::Email, "ada@example.com"),
    (FieldId::Phone, "(555) 123-4567"),
    (FieldId::Password, "Analytic1"),
    (FieldId::ConfirmPassword, "Analytic1"),
    (FieldId::Age, "36"),
];

/// Fill every field with a valid value and tick the terms checkbox.
pub fn fill_valid(surface: &MemorySurface) {
    for (field, value) in VALID_VALUES {
        surface.set_value(field, value);
    }
    surface.set_terms(true);
}
