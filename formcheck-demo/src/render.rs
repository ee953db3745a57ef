//! Plain-text rendering of the form.

use std::fmt::Write;

use formcheck::surface::{Indicator, Panel, SurfaceSnapshot};
use formcheck::{FieldId, Phase};

fn marker(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Neutral => " ",
        Indicator::Valid => "+",
        Indicator::Invalid => "!",
    }
}

fn shown(field: FieldId, value: &str) -> String {
    match field {
        FieldId::Password | FieldId::ConfirmPassword => "*".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

/// Draw the visible page: the form, or the success panel after a submit.
pub fn render(snapshot: &SurfaceSnapshot, phase: Phase) -> String {
    let mut out = String::new();

    if snapshot.is_visible(Panel::Success) {
        let _ = writeln!(out, "+--------------------------------------------+");
        let _ = writeln!(out, "| Registration successful! Resetting shortly. |");
        let _ = writeln!(out, "+--------------------------------------------+");
    }

    if snapshot.is_visible(Panel::Form) {
        for field in FieldId::ALL {
            let _ = writeln!(
                out,
                "[{}] {:<16} {}",
                marker(snapshot.indicator(field)),
                field.as_str(),
                shown(field, snapshot.value(field))
            );
            if let Some(error) = snapshot.error(field) {
                let _ = writeln!(out, "      {error}");
            }
        }
        let _ = writeln!(
            out,
            "[{}] I agree to the terms",
            if snapshot.terms { "x" } else { " " }
        );
        if let Some(error) = &snapshot.terms_error {
            let _ = writeln!(out, "      {error}");
        }
    }

    let _ = write!(out, "({phase:?})");
    out
}
