//! Tests for the tokio-backed reset scheduler.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use common::fill_valid;
use formcheck::events::{self, EventReceiver};
use formcheck::prelude::*;
use formcheck::scheduler::SchedulerError;

/// Wait for the reset event, skipping the submit that precedes it.
async fn next_reset(rx: &mut EventReceiver) -> Option<FormEvent> {
    loop {
        match rx.recv().await {
            Some(FormEvent::Submitted(_)) => continue,
            other => return other,
        }
    }
}

#[test]
fn test_tokio_scheduler_requires_runtime() {
    assert!(matches!(
        TokioScheduler::new(),
        Err(SchedulerError::NoRuntime)
    ));
}

#[tokio::test(start_paused = true)]
async fn test_tokio_reset_fires_after_delay() {
    let surface = Arc::new(MemorySurface::new());
    let scheduler = TokioScheduler::new().expect("inside a runtime");
    let (tx, mut rx) = events::channel();
    let controller = FormController::new(
        Arc::clone(&surface),
        Arc::new(scheduler),
        FormConfig::default(),
    )
    .with_events(tx);

    fill_valid(&surface);
    assert!(controller.on_submit().is_valid());
    assert!(matches!(rx.try_recv(), Some(FormEvent::Submitted(_))));

    tokio::time::sleep(Duration::from_millis(2_900)).await;
    assert_eq!(controller.phase(), Phase::Submitted);
    assert!(surface.is_visible(Panel::Success));

    let event = tokio::time::timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("reset should fire within the delay");
    assert_eq!(event, Some(FormEvent::Reset));
    assert_eq!(controller.phase(), Phase::Editing);
    assert!(surface.is_visible(Panel::Form));
    assert_eq!(surface.read_value(FieldId::Email), "");
}

#[tokio::test(start_paused = true)]
async fn test_tokio_reset_ignores_later_edits() {
    let surface = Arc::new(MemorySurface::new());
    let (tx, mut rx) = events::channel();
    let controller = FormController::new(
        Arc::clone(&surface),
        Arc::new(TokioScheduler::new().expect("inside a runtime")),
        FormConfig::default(),
    )
    .with_events(tx);

    fill_valid(&surface);
    controller.on_submit();
    tokio::time::sleep(Duration::from_secs(2)).await;
    surface.set_value(FieldId::Age, "99");

    assert_eq!(next_reset(&mut rx).await, Some(FormEvent::Reset));
    assert_eq!(surface.read_value(FieldId::Age), "");
}

// ============================================================================
// Concurrent operations
// ============================================================================

/// A surface whose password reads can be made to stall, holding a blur open
/// while the reset timer expires on another worker.
struct StallingSurface {
    inner: MemorySurface,
    stall: AtomicBool,
}

impl StallingSurface {
    fn new() -> Self {
        Self {
            inner: MemorySurface::new(),
            stall: AtomicBool::new(false),
        }
    }
}

impl Surface for StallingSurface {
    fn read_value(&self, field: FieldId) -> String {
        if field == FieldId::Password && self.stall.load(Ordering::SeqCst) {
            std::thread::sleep(Duration::from_millis(200));
        }
        self.inner.read_value(field)
    }

    fn terms_accepted(&self) -> bool {
        self.inner.terms_accepted()
    }

    fn set_error(&self, field: FieldId, message: Option<&str>) {
        self.inner.set_error(field, message);
    }

    fn set_indicator(&self, field: FieldId, indicator: Indicator) {
        self.inner.set_indicator(field, indicator);
    }

    fn set_terms_error(&self, message: Option<&str>) {
        self.inner.set_terms_error(message);
    }

    fn show_panel(&self, panel: Panel) {
        self.inner.show_panel(panel);
    }

    fn hide_panel(&self, panel: Panel) {
        self.inner.hide_panel(panel);
    }

    fn scroll_into_view(&self, target: ScrollTarget) {
        self.inner.scroll_into_view(target);
    }

    fn reset_inputs(&self) {
        self.inner.reset_inputs();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_reset_waits_for_blur_in_progress() {
    let surface = Arc::new(StallingSurface::new());
    let (tx, mut rx) = events::channel();
    let controller = FormController::new(
        Arc::clone(&surface),
        Arc::new(TokioScheduler::new().expect("inside a runtime")),
        FormConfig::new()
            .reset_delay(Duration::from_millis(50))
            .log_submissions(false),
    )
    .with_events(tx);

    fill_valid(&surface.inner);
    assert!(controller.on_submit().is_valid());

    // The blur reads a valid email, then stalls past the reset deadline.
    surface.stall.store(true, Ordering::SeqCst);
    assert!(tokio::task::block_in_place(|| {
        controller.on_field_blur(FieldId::Email)
    }));
    surface.stall.store(false, Ordering::SeqCst);

    let event = tokio::time::timeout(Duration::from_secs(2), next_reset(&mut rx))
        .await
        .expect("reset should fire once the blur finishes");
    assert_eq!(event, Some(FormEvent::Reset));

    assert_eq!(controller.field_state(FieldId::Email), FieldState::Pristine);
    assert_eq!(surface.inner.indicator(FieldId::Email), Indicator::Neutral);
    assert_eq!(surface.inner.error(FieldId::Email), None);
    assert_eq!(surface.read_value(FieldId::Email), "");
    assert_eq!(controller.phase(), Phase::Editing);
}
