use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which waits re-check the shutdown flag
const POLL_SLICE: Duration = Duration::from_millis(100);

/// Shared cancellation flag, set from the Ctrl+C handler.
///
/// Every suspension point in the monitor goes through [`ShutdownSignal::wait`],
/// so an interrupt is noticed within one slice instead of after a full sleep.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request shutdown
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Block for `duration` unless shutdown is requested first.
    ///
    /// Returns `true` when the full duration elapsed, `false` when cancelled.
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;

        loop {
            if self.is_triggered() {
                return false;
            }

            let now = Instant::now();
            if now >= deadline {
                return true;
            }

            thread::sleep(POLL_SLICE.min(deadline - now));
        }
    }
}
