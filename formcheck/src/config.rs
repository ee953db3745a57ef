//! Form controller configuration.

use std::time::Duration;

/// Default delay between a successful submit and the automatic reset.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);

/// Behaviour knobs for a [`FormController`](crate::FormController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// How long the success panel stays up before the form resets.
    pub reset_delay: Duration,

    /// Log the submitted values at info level on success.
    pub log_submissions: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            log_submissions: true,
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the post-submit reset delay.
    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Enable or disable logging of submitted values.
    pub fn log_submissions(mut self, enabled: bool) -> Self {
        self.log_submissions = enabled;
        self
    }
}
