//! Aggregate form state.

use crate::field::{FieldId, FieldState};

/// Form-level phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// The form is shown and accepts input.
    #[default]
    Editing,
    /// A valid submit happened; the success panel is up until the reset.
    Submitted,
}

/// Every field's state plus the terms flag and the current phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; FieldId::COUNT],
    /// Terms checkbox value as of the last submit.
    pub terms_accepted: bool,
    pub phase: Phase,
}

impl FormState {
    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn set_field(&mut self, field: FieldId, state: FieldState) {
        self.fields[field.index()] = state;
    }

    /// Fields with their states, in document order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldState)> {
        FieldId::ALL.into_iter().zip(self.fields.iter())
    }

    /// True iff every field is valid and the terms were accepted.
    pub fn is_submittable(&self) -> bool {
        self.terms_accepted && self.fields.iter().all(FieldState::is_valid)
    }

    /// First field, in document order, currently showing an error.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.fields()
            .find(|(_, state)| state.is_invalid())
            .map(|(field, _)| field)
    }
}
