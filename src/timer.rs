use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::runtime::Event;

/// Cancellation handle for an armed repeating timer.
///
/// Cancelling is idempotent, and dropping the handle cancels too, so a
/// session that replaces its timer can never leak a live ticker thread.
/// The handle deliberately does not implement `Clone`: exactly one owner
/// decides when the timer dies.
#[derive(Debug)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Arms repeating countdown timers on behalf of the session controller.
///
/// The controller holds at most one live handle at a time; swapping
/// schedulers is how tests trade the spawned thread for direct `tick`
/// calls.
pub trait TickScheduler {
    /// Start a repeating timer and hand back its cancellation handle.
    fn arm(&self) -> TimerHandle;
}

/// Production scheduler: a spawned thread sends one `Event::Tick` into the
/// app's event channel per interval until the handle is cancelled or the
/// channel closes.
pub struct ThreadScheduler {
    tx: Sender<Event>,
    interval: Duration,
}

impl ThreadScheduler {
    pub fn new(tx: Sender<Event>, interval: Duration) -> Self {
        Self { tx, interval }
    }

    /// The countdown granularity of a real session.
    pub fn per_second(tx: Sender<Event>) -> Self {
        Self::new(tx, Duration::from_secs(1))
    }
}

impl TickScheduler for ThreadScheduler {
    fn arm(&self) -> TimerHandle {
        let handle = TimerHandle::new();
        let cancelled = handle.flag();
        let tx = self.tx.clone();
        let interval = self.interval;

        thread::spawn(move || loop {
            thread::sleep(interval);
            if cancelled.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });

        handle
    }
}

/// Scheduler that never delivers a tick; tests drive `Session::tick`
/// directly and still get a real handle to observe.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualScheduler;

impl TickScheduler for ManualScheduler {
    fn arm(&self) -> TimerHandle {
        TimerHandle::new()
    }
}
