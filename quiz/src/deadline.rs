//! Session deadline controller.
//!
//! One countdown for the whole session: started once, fires exactly once, and
//! stays expired permanently. There is no per-question timeout and no
//! cancellation; the budget applies to the sequence as a whole.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// Handle to the session deadline, shared by the orchestrator and the timer
/// thread. Cheap to clone; all clones observe the same expiry state.
#[derive(Debug, Clone)]
pub struct DeadlineHandle {
    deadline: Instant,
    expired: Arc<AtomicBool>,
}

impl DeadlineHandle {
    /// Start the session countdown.
    ///
    /// Spawns the timer thread, which sleeps for `budget`, flips the expiry
    /// flag exactly once, and exits. The thread is detached: it holds only the
    /// flag, so it cannot outlive its usefulness in any harmful way.
    pub fn start(budget: Duration) -> Self {
        let handle = Self {
            deadline: Instant::now() + budget,
            expired: Arc::new(AtomicBool::new(false)),
        };
        let expired = Arc::clone(&handle.expired);
        thread::spawn(move || {
            thread::sleep(budget);
            expired.store(true, Ordering::Release);
            debug!(budget_secs = budget.as_secs_f64(), "session budget expired");
        });
        handle
    }

    /// Whether the session budget has expired.
    ///
    /// Reports expired as soon as the deadline instant has passed, even if the
    /// timer thread has not yet woken to set the flag. Answers observed at or
    /// after the deadline are therefore never accepted, regardless of
    /// scheduler jitter. Once expired, always expired.
    pub fn expired(&self) -> bool {
        self.expired.load(Ordering::Acquire) || Instant::now() >= self.deadline
    }

    /// Time left before expiry; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Build a handle whose expiry is driven by the returned trigger instead
    /// of a timer thread. The deadline instant sits far in the future, so only
    /// the trigger can expire the handle.
    #[cfg(any(test, feature = "test-support"))]
    pub fn manual() -> (Self, ManualExpiry) {
        let expired = Arc::new(AtomicBool::new(false));
        let handle = Self {
            deadline: Instant::now() + Duration::from_secs(60 * 60 * 24),
            expired: Arc::clone(&expired),
        };
        (handle, ManualExpiry(expired))
    }
}

/// Test-only lever that expires a [`DeadlineHandle::manual`] handle on demand.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone)]
pub struct ManualExpiry(Arc<AtomicBool>);

#[cfg(any(test, feature = "test-support"))]
impl ManualExpiry {
    pub fn fire(&self) {
        self.0.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deadline_is_not_expired() {
        let handle = DeadlineHandle::start(Duration::from_secs(60));
        assert!(!handle.expired());
        assert!(handle.remaining() > Duration::from_secs(30));
    }

    #[test]
    fn timer_expires_and_stays_expired() {
        let handle = DeadlineHandle::start(Duration::from_millis(30));
        thread::sleep(Duration::from_millis(120));
        assert!(handle.expired());
        assert_eq!(handle.remaining(), Duration::ZERO);
        // Idempotent: late observers still see "expired".
        assert!(handle.expired());
    }

    #[test]
    fn expiry_is_authoritative_even_before_the_timer_thread_wakes() {
        // A zero budget is past-deadline immediately; the instant check must
        // report expired without waiting for the flag.
        let handle = DeadlineHandle::start(Duration::ZERO);
        assert!(handle.expired());
    }

    #[test]
    fn manual_trigger_expires_the_handle() {
        let (handle, trigger) = DeadlineHandle::manual();
        assert!(!handle.expired());
        trigger.fire();
        assert!(handle.expired());
    }
}
