//! Registration form validation.
//!
//! [`FormController`] reacts to focus, blur and submit events, validating the
//! six registration fields with the rules in [`validation`] and reflecting
//! the outcome on an injected [`Surface`](surface::Surface).

pub mod config;
pub mod controller;
pub mod events;
pub mod field;
pub mod form;
pub mod scheduler;
pub mod state;
pub mod submission;
pub mod surface;
pub mod validation;

pub use config::FormConfig;
pub use controller::FormController;
pub use field::{FieldId, FieldState, ParseFieldError};
pub use form::{FormState, Phase};
pub use state::State;
pub use submission::Submission;

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::controller::FormController;
    pub use crate::events::{EventReceiver, EventSender, FormEvent};
    pub use crate::field::{FieldId, FieldState};
    pub use crate::form::{FormState, Phase};
    pub use crate::scheduler::{ManualScheduler, Scheduler, TokioScheduler};
    pub use crate::surface::{Indicator, MemorySurface, Panel, ScrollTarget, Surface};
    pub use crate::validation::{ErrorTarget, FieldError, ValidationError, ValidationResult};
}
