//! Single-slot deadline timer
//!
//! A `Timer` holds at most one pending deadline. Starting it again replaces
//! the previous deadline, cancelling it. There are no callbacks: the owner
//! polls with [`Timer::take_due`] from its `tick`, so a cancelled timer can
//! never fire late.

use std::time::{Duration, Instant};

/// Cancel-and-replace timer handle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Create an unarmed timer
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm the timer. No-op if it is not armed.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the timer is armed and its deadline has passed
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| d <= now)
    }

    /// Disarm and return the deadline if it is due
    ///
    /// Returns `None` (and leaves the timer untouched) when not yet due.
    pub fn take_due(&mut self, now: Instant) -> Option<Instant> {
        if self.is_due(now) {
            self.deadline.take()
        } else {
            None
        }
    }
}

/// Earliest of a set of optional deadlines
pub fn earliest(deadlines: impl IntoIterator<Item = Option<Instant>>) -> Option<Instant> {
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_timer_is_unarmed() {
        let timer = Timer::new();
        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn test_start_sets_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0, ms(100));
        assert_eq!(timer.deadline(), Some(t0 + ms(100)));
        assert!(!timer.is_due(t0 + ms(99)));
        assert!(timer.is_due(t0 + ms(100)));
    }

    #[test]
    fn test_restart_replaces_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0, ms(100));
        timer.start(t0 + ms(50), ms(100));
        assert!(!timer.is_due(t0 + ms(120)));
        assert_eq!(timer.take_due(t0 + ms(150)), Some(t0 + ms(150)));
    }

    #[test]
    fn test_take_due_fires_once() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0, ms(10));
        assert_eq!(timer.take_due(t0 + ms(5)), None);
        assert!(timer.is_armed());
        assert_eq!(timer.take_due(t0 + ms(20)), Some(t0 + ms(10)));
        assert_eq!(timer.take_due(t0 + ms(30)), None);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.start(t0, ms(10));
        timer.cancel();
        assert_eq!(timer.take_due(t0 + ms(100)), None);
        // Cancelling twice is fine
        timer.cancel();
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_earliest() {
        let t0 = Instant::now();
        assert_eq!(earliest([None, None]), None);
        assert_eq!(
            earliest([Some(t0 + ms(30)), None, Some(t0 + ms(10))]),
            Some(t0 + ms(10))
        );
    }
}
