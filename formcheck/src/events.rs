//! Notifications for form changes a front end did not initiate.
//!
//! Blur, focus and submit return synchronously, so the caller already knows
//! to redraw. A successful submit and the deferred reset are reported here as
//! well: the reset lands while the front end is idle, and the submit carries
//! the values that were accepted.

use log::trace;
use tokio::sync::mpsc;

use crate::submission::Submission;

/// Something that happened to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A submit passed validation with these values.
    Submitted(Submission),
    /// The deferred reset ran; the form is editable and empty again.
    Reset,
}

/// Sending half, handed to a [`FormController`](crate::FormController).
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<FormEvent>,
}

impl EventSender {
    /// Deliver `event`. A dropped receiver means the front end is gone.
    pub fn send(&self, event: FormEvent) {
        if self.tx.send(event).is_err() {
            trace!("Form event dropped, receiver closed");
        }
    }
}

/// Receiving half, owned by the front end.
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::UnboundedReceiver<FormEvent>,
}

impl EventReceiver {
    /// Wait for the next event.
    pub async fn recv(&mut self) -> Option<FormEvent> {
        self.rx.recv().await
    }

    /// Take an already delivered event without waiting.
    pub fn try_recv(&mut self) -> Option<FormEvent> {
        self.rx.try_recv().ok()
    }
}

/// Create a connected sender/receiver pair.
pub fn channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender { tx }, EventReceiver { rx })
}
