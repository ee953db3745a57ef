//! Form validation controller.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info, warn};

use crate::config::FormConfig;
use crate::events::{EventSender, FormEvent};
use crate::field::{FieldId, FieldState};
use crate::form::{FormState, Phase};
use crate::scheduler::Scheduler;
use crate::state::State;
use crate::submission::Submission;
use crate::surface::{Indicator, Panel, ScrollTarget, Surface};
use crate::validation::{FieldError, TERMS_MESSAGE, ValidationError, ValidationResult, check_field};

/// Drives field and form validation in response to focus, blur and submit.
///
/// Each operation runs to completion synchronously against the injected
/// [`Surface`]. A successful submit hands a reset task to the [`Scheduler`];
/// that task is never cancelled and runs even if the user starts editing
/// before it fires.
///
/// Blur, focus, submit and the reset hold a shared operation lock for their
/// whole run, so a reset firing on another thread never interleaves with a
/// user-driven operation. Schedulers must not run a task from inside
/// [`Scheduler::schedule`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use formcheck::scheduler::ManualScheduler;
/// use formcheck::surface::MemorySurface;
/// use formcheck::{FieldId, FieldState, FormConfig, FormController};
///
/// let surface = Arc::new(MemorySurface::new());
/// let controller = FormController::new(
///     Arc::clone(&surface),
///     Arc::new(ManualScheduler::new()),
///     FormConfig::default(),
/// );
///
/// surface.set_value(FieldId::Email, "not-an-email");
/// assert!(!controller.on_field_blur(FieldId::Email));
/// assert_eq!(
///     controller.field_state(FieldId::Email),
///     FieldState::Invalid("Please enter a valid email address".into()),
/// );
/// ```
pub struct FormController<S: Surface + 'static> {
    surface: Arc<S>,
    scheduler: Arc<dyn Scheduler>,
    config: FormConfig,
    state: State<FormState>,
    events: Option<EventSender>,
    operation: Arc<Mutex<()>>,
}

fn lock_operation(operation: &Mutex<()>) -> MutexGuard<'_, ()> {
    operation
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<S: Surface + 'static> FormController<S> {
    pub fn new(surface: Arc<S>, scheduler: Arc<dyn Scheduler>, config: FormConfig) -> Self {
        Self {
            surface,
            scheduler,
            config,
            state: State::default(),
            events: None,
            operation: Arc::new(Mutex::new(())),
        }
    }

    /// Report submits and resets to `events`.
    pub fn with_events(mut self, events: EventSender) -> Self {
        self.events = Some(events);
        self
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Shared handle to the form state.
    pub fn state(&self) -> &State<FormState> {
        &self.state
    }

    /// Copy of the current form state.
    pub fn form_state(&self) -> FormState {
        self.state.get()
    }

    pub fn field_state(&self, field: FieldId) -> FieldState {
        self.state.read(|s| s.field(field).clone())
    }

    pub fn phase(&self) -> Phase {
        self.state.read(|s| s.phase)
    }

    /// Validate `field` as the user leaves it. Returns whether it passed.
    pub fn on_field_blur(&self, field: FieldId) -> bool {
        let _operation = lock_operation(&self.operation);
        self.evaluate(field).is_ok()
    }

    /// Clear the field's error and marker as the user enters it.
    ///
    /// The field's value is left alone.
    pub fn on_field_focus(&self, field: FieldId) {
        let _operation = lock_operation(&self.operation);
        self.surface.set_error(field, None);
        self.surface.set_indicator(field, Indicator::Neutral);
        self.state.update(|s| s.set_field(field, FieldState::Pristine));
        debug!("Focus {}", field);
    }

    /// Validate the whole form and, if it passes, show the success panel and
    /// schedule the reset.
    ///
    /// On failure the first invalid field is scrolled into view and the form
    /// stays editable. While the form is [`Phase::Submitted`] the call is
    /// ignored and reports [`ValidationResult::Valid`].
    pub fn on_submit(&self) -> ValidationResult {
        let _operation = lock_operation(&self.operation);
        if self.phase() == Phase::Submitted {
            debug!("Submit ignored, form already submitted");
            return ValidationResult::Valid;
        }

        for field in FieldId::ALL {
            self.surface.set_indicator(field, Indicator::Neutral);
        }

        let mut errors: Vec<FieldError> = FieldId::ALL
            .into_iter()
            .filter_map(|field| {
                self.evaluate(field)
                    .err()
                    .map(|error| FieldError::field(field, error))
            })
            .collect();

        let terms_accepted = self.surface.terms_accepted();
        if terms_accepted {
            self.surface.set_terms_error(None);
        } else {
            self.surface.set_terms_error(Some(TERMS_MESSAGE));
            errors.push(FieldError::terms(ValidationError::rule(TERMS_MESSAGE)));
        }
        self.state.update(|s| s.terms_accepted = terms_accepted);

        let result = ValidationResult::from_errors(errors);
        if result.is_valid() {
            self.complete();
        } else {
            debug!("Submit rejected with {} error(s)", result.errors().len());
            if let Some(field) = self.state.read(FormState::first_invalid) {
                self.surface.scroll_into_view(ScrollTarget::Field(field));
            }
        }
        result
    }

    fn evaluate(&self, field: FieldId) -> Result<(), ValidationError> {
        let value = self.surface.read_value(field);
        let password = self.surface.read_value(FieldId::Password);

        let outcome = check_field(field, &value, &password);
        match &outcome {
            Ok(()) => {
                self.surface.set_error(field, None);
                self.surface.set_indicator(field, Indicator::Valid);
                self.state.update(|s| s.set_field(field, FieldState::Valid));
                debug!("{} valid", field);
            }
            Err(error) => {
                let message = error.message();
                self.surface.set_error(field, Some(message));
                self.surface.set_indicator(field, Indicator::Invalid);
                self.state
                    .update(|s| s.set_field(field, FieldState::Invalid(message.to_string())));
                debug!("{} invalid: {}", field, message);
            }
        }
        outcome
    }

    fn complete(&self) {
        self.surface.hide_panel(Panel::Form);
        self.surface.show_panel(Panel::Success);
        self.surface.scroll_into_view(ScrollTarget::Panel(Panel::Success));
        self.state.update(|s| s.phase = Phase::Submitted);

        let submission = Submission::capture(self.surface.as_ref());
        if self.config.log_submissions {
            match serde_json::to_string(&submission) {
                Ok(json) => info!("Form submitted successfully: {}", json),
                Err(e) => warn!("Form submitted, failed to serialize values: {}", e),
            }
        }
        if let Some(events) = &self.events {
            events.send(FormEvent::Submitted(submission));
        }

        let reset = ResetTask {
            surface: Arc::clone(&self.surface),
            state: self.state.clone(),
            events: self.events.clone(),
            operation: Arc::clone(&self.operation),
        };
        debug!("Reset scheduled in {:?}", self.config.reset_delay);
        self.scheduler.schedule(self.config.reset_delay, Box::new(move || reset.run()));
    }
}

/// Everything the deferred reset touches, detached from the controller.
struct ResetTask<S: Surface + 'static> {
    surface: Arc<S>,
    state: State<FormState>,
    events: Option<EventSender>,
    operation: Arc<Mutex<()>>,
}

impl<S: Surface + 'static> ResetTask<S> {
    /// Return the page and the form state to a fresh, editable form.
    fn run(self) {
        let _operation = lock_operation(&self.operation);
        reset_surface(self.surface.as_ref());
        self.state.set(FormState::default());
        info!("Form reset");

        if let Some(events) = &self.events {
            events.send(FormEvent::Reset);
        }
    }
}

fn reset_surface<S: Surface + ?Sized>(surface: &S) {
    surface.reset_inputs();
    for field in FieldId::ALL {
        surface.set_error(field, None);
        surface.set_indicator(field, Indicator::Neutral);
    }
    surface.set_terms_error(None);
    surface.show_panel(Panel::Form);
    surface.hide_panel(Panel::Success);
}
