//! Display and input surface the controller drives.
//!
//! The controller never looks anything up on its own; every read of a field
//! value and every visible change goes through a [`Surface`]. A browser
//! binding, a terminal UI, or [`MemorySurface`] in tests can all sit behind
//! it.

mod memory;

pub use memory::{MemorySurface, SurfaceSnapshot};

use crate::field::FieldId;

/// Visual marker on an input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indicator {
    /// Neither the valid nor the invalid marker.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Top-level containers that are shown or hidden as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The registration form itself.
    Form,
    /// The message shown after a successful submit.
    Success,
}

/// Something the surface can bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Field(FieldId),
    Panel(Panel),
}

/// Capabilities the form controller needs from the page.
///
/// Methods take `&self`; implementations use interior mutability so one
/// surface can be shared between the controller and its deferred reset.
pub trait Surface: Send + Sync {
    /// Current raw text of a field.
    fn read_value(&self, field: FieldId) -> String;

    /// Whether the terms checkbox is ticked.
    fn terms_accepted(&self) -> bool;

    /// Show `message` in the field's error slot, or hide the slot on `None`.
    fn set_error(&self, field: FieldId, message: Option<&str>);

    /// Set the field's valid/invalid marker.
    fn set_indicator(&self, field: FieldId, indicator: Indicator);

    /// Show or hide the terms error.
    fn set_terms_error(&self, message: Option<&str>);

    fn show_panel(&self, panel: Panel);

    fn hide_panel(&self, panel: Panel);

    fn scroll_into_view(&self, target: ScrollTarget);

    /// Restore every input to its default: empty text, terms unchecked.
    fn reset_inputs(&self);
}
