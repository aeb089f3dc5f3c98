use std::time::{Duration, Instant};

/// Trailing-edge debouncer for a rapidly changing value.
///
/// `push` replaces any pending value and restarts the quiet-period window;
/// `poll` hands the value out exactly once after the window has elapsed
/// with no further pushes. There is no leading-edge emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    value: T,
    armed_at: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces the pending value and rearms the quiet-period window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            armed_at: now,
        });
    }

    /// Emits the pending value if the quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.armed_at) >= self.delay);
        if ready {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops any pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}
