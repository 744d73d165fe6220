//! Logger gate
//!
//! The console diagnostics inside the aggregation pass are throttled by a
//! single shared gate: open for exactly one pass every three seconds, so
//! all of a pass's diagnostic lines print together or not at all.

use super::interval::IntervalTimer;

/// Interval between diagnostic print bursts
pub const LOG_INTERVAL_MS: u64 = 3_000;

/// One-pass-wide print gate.
///
/// `update` must run once per loop pass, before the aggregation pass
/// consults `is_open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LogGate {
    timer: IntervalTimer,
    open: bool,
}

impl LogGate {
    /// Create a gate that opens on the first pass
    pub const fn new() -> Self {
        Self {
            timer: IntervalTimer::new(LOG_INTERVAL_MS),
            open: false,
        }
    }

    /// Recompute the gate for this pass
    pub fn update(&mut self, now_ms: u64) {
        if self.timer.due(now_ms) {
            self.timer.fire(now_ms);
            self.open = true;
        } else {
            self.open = false;
        }
    }

    /// Whether this pass's diagnostics should print
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Default for LogGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_open_on_first_pass_only() {
        let mut gate = LogGate::new();
        gate.update(0);
        assert!(gate.is_open());
        gate.update(1);
        assert!(!gate.is_open());
        gate.update(2_999);
        assert!(!gate.is_open());
    }

    #[test]
    fn test_reopens_after_interval() {
        let mut gate = LogGate::new();
        gate.update(0);
        gate.update(1_500);
        assert!(!gate.is_open());
        gate.update(3_000);
        assert!(gate.is_open());
        gate.update(3_001);
        assert!(!gate.is_open());
    }

    proptest! {
        /// Across any monotone sequence of pass times, the gate is open at
        /// most once per three-second window.
        #[test]
        fn prop_at_most_one_open_pass_per_window(
            deltas in proptest::collection::vec(0u64..500, 1..200),
        ) {
            let mut gate = LogGate::new();
            let mut now = 0u64;
            let mut opened_at: std::vec::Vec<u64> = std::vec::Vec::new();

            for delta in deltas {
                now += delta;
                gate.update(now);
                if gate.is_open() {
                    opened_at.push(now);
                }
            }

            for pair in opened_at.windows(2) {
                prop_assert!(pair[1] - pair[0] >= LOG_INTERVAL_MS);
            }
        }
    }
}
