//! One-shot deferred callbacks.
//!
//! The form schedules its post-submit reset through a [`Scheduler`] so the
//! controller stays synchronous and tests can drive time by hand. Scheduled
//! tasks cannot be cancelled.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;

/// A callback to run once after a delay.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay, fire-and-forget.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Errors that can occur when creating a scheduler.
#[derive(Debug, Clone, Error)]
pub enum SchedulerError {
    /// `TokioScheduler::new` was called outside a tokio runtime.
    #[error("No tokio runtime available to schedule tasks on")]
    NoRuntime,
}

/// Schedules tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Bind to the runtime the caller is running in.
    pub fn new() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| SchedulerError::NoRuntime)
    }

    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// A scheduler driven by an explicit virtual clock.
///
/// Nothing runs until [`advance`](Self::advance) moves the clock past a
/// task's deadline. Tasks due at the same instant run in scheduling order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// use formcheck::scheduler::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// scheduler.schedule(Duration::from_secs(3), Box::new(move || flag.store(true, Ordering::SeqCst)));
///
/// scheduler.advance(Duration::from_secs(2));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_secs(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<ManualClock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn clock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.clock().now
    }

    /// Number of tasks not yet run.
    pub fn pending(&self) -> usize {
        self.clock().pending.len()
    }

    /// Move the clock forward and run every task that became due.
    ///
    /// Returns how many tasks ran. Tasks scheduled by a running task are run
    /// too if their deadline falls within the advanced window.
    pub fn advance(&self, by: Duration) -> usize {
        let target = {
            let mut clock = self.clock();
            clock.now += by;
            clock.now
        };

        let mut ran = 0;
        while let Some(task) = self.pop_due(target) {
            // Lock released so the task may schedule more work.
            task();
            ran += 1;
        }
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.clock();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        Some(clock.pending.remove(index).task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.clock();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(Pending { due, seq, task });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.pending.len())
            .finish()
    }
}
