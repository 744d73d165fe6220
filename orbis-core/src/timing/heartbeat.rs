//! Heartbeat state machine
//!
//! Drives the board's status LED with a 1 s on / 2 s off duty cycle,
//! independent of every other periodic task. The machine is pure state
//! over injected time; the firmware writes the LED only on transitions.

/// Time the LED stays lit
pub const HEARTBEAT_ON_MS: u64 = 1_000;

/// Time the LED stays dark
pub const HEARTBEAT_OFF_MS: u64 = 2_000;

/// Two-state blinker: Off -> On after 2 s, On -> Off after 1 s.
///
/// `last_transition` starts as `None` ("elapsed infinitely long ago"), so
/// the first `update` turns the LED on immediately. At most one
/// transition happens per update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Heartbeat {
    on: bool,
    last_transition: Option<u64>,
}

impl Heartbeat {
    /// Create a heartbeat in the Off state, due to transition immediately
    pub const fn new() -> Self {
        Self {
            on: false,
            last_transition: None,
        }
    }

    /// Advance the machine; returns the new LED level on a transition,
    /// `None` when nothing changed this pass.
    pub fn update(&mut self, now_ms: u64) -> Option<bool> {
        let hold_ms = if self.on {
            HEARTBEAT_ON_MS
        } else {
            HEARTBEAT_OFF_MS
        };
        let due = match self.last_transition {
            None => true,
            Some(last) => now_ms >= last + hold_ms,
        };
        if !due {
            return None;
        }

        self.on = !self.on;
        self.last_transition = Some(now_ms);
        Some(self.on)
    }

    /// Force the LED off without touching the transition timer; returns
    /// the level to write. Shutdown use only, never called from the
    /// steady-state loop.
    pub fn stop(&mut self) -> bool {
        self.on = false;
        false
    }

    /// Current LED state
    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_transition_immediate() {
        let mut heartbeat = Heartbeat::new();
        assert_eq!(heartbeat.update(0), Some(true));
        assert!(heartbeat.is_on());
    }

    #[test]
    fn test_duty_cycle() {
        let mut heartbeat = Heartbeat::new();
        heartbeat.update(0);

        // On until t=1s...
        assert_eq!(heartbeat.update(500), None);
        assert_eq!(heartbeat.update(999), None);
        assert_eq!(heartbeat.update(1_000), Some(false));

        // ...off until t=3s...
        assert_eq!(heartbeat.update(1_500), None);
        assert_eq!(heartbeat.update(2_999), None);
        assert_eq!(heartbeat.update(3_000), Some(true));

        // ...and the cycle repeats with a 3 s period.
        assert_eq!(heartbeat.update(4_000), Some(false));
        assert_eq!(heartbeat.update(6_000), Some(true));
    }

    #[test]
    fn test_period_independent_of_pass_rate() {
        // Sparse passes: transitions land on the first pass at or after
        // the deadline, never more than one per pass.
        let mut heartbeat = Heartbeat::new();
        assert_eq!(heartbeat.update(10), Some(true));
        assert_eq!(heartbeat.update(2_500), Some(false));
        assert_eq!(heartbeat.update(2_600), None);
        assert_eq!(heartbeat.update(4_500), Some(true));
    }

    #[test]
    fn test_stop_forces_off_without_touching_timer() {
        let mut heartbeat = Heartbeat::new();
        heartbeat.update(0);
        assert!(heartbeat.is_on());

        assert_eq!(heartbeat.stop(), false);
        assert!(!heartbeat.is_on());

        // The timer still dates from the t=0 transition: the Off hold
        // period is measured from there, not from the stop call.
        assert_eq!(heartbeat.update(1_999), None);
        assert_eq!(heartbeat.update(2_000), Some(true));
    }
}
