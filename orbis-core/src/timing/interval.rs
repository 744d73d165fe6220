//! Interval timer value object
//!
//! Replaces the scattered `now >= last + interval` checks with a single
//! `due`/`fire` pair shared by every periodic task.

/// A fixed-interval wall-clock timer.
///
/// `last_fired` starts as `None`, a sentinel meaning "elapsed infinitely
/// long ago": the first `due` check always passes, so every periodic task
/// fires on the first loop pass after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer {
    interval_ms: u64,
    last_fired: Option<u64>,
}

impl IntervalTimer {
    /// Create a timer that is immediately due
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired: None,
        }
    }

    /// True when the interval has elapsed since the last `fire`
    pub fn due(&self, now_ms: u64) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now_ms >= last + self.interval_ms,
        }
    }

    /// Record a firing at `now_ms`
    pub fn fire(&mut self, now_ms: u64) {
        self.last_fired = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_immediately_after_creation() {
        let timer = IntervalTimer::new(3_000);
        assert!(timer.due(0));
        assert!(timer.due(1));
    }

    #[test]
    fn test_not_due_within_interval() {
        let mut timer = IntervalTimer::new(500);
        timer.fire(100);
        assert!(!timer.due(100));
        assert!(!timer.due(599));
        assert!(timer.due(600));
        assert!(timer.due(10_000));
    }

    #[test]
    fn test_fire_resets_window() {
        let mut timer = IntervalTimer::new(500);
        timer.fire(0);
        timer.fire(600);
        assert!(!timer.due(1_099));
        assert!(timer.due(1_100));
    }
}
