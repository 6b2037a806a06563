//! Single-handle periodic tick source.
//!
//! The hosting loop polls the timer with the current `Instant`; the timer
//! answers how many whole intervals have elapsed since it last fired.
//! Only one arming is ever live: arming again replaces the previous
//! deadline and handle, and cancelling clears it before returning, so a
//! poll after pause or stop can never produce a stale tick.

use crate::core::constants::{MAX_CATCH_UP_TICKS, TICK_INTERVAL_MS};
use std::time::{Duration, Instant};

/// Identifies one arming of a [`TickTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts a fresh cadence from `now`, cancelling any earlier arming.
    pub fn arm(&mut self, now: Instant) -> TimerHandle {
        self.generation += 1;
        self.next_due = Some(now + self.interval);
        TimerHandle(self.generation)
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// True if `handle` came from the arming that is currently live.
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.is_armed() && handle.0 == self.generation
    }

    /// Time left until the next tick, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Number of ticks due at `now`. Advances the deadline by one
    /// interval per tick returned. A loop that stalled for longer than
    /// `MAX_CATCH_UP_TICKS` intervals drops the excess and restarts the
    /// cadence from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut fired = 0;
        while due <= now {
            fired += 1;
            due += self.interval;
            if fired == MAX_CATCH_UP_TICKS {
                if due <= now {
                    due = now + self.interval;
                }
                break;
            }
        }

        self.next_due = Some(due);
        fired
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = TickTimer::default();
        let now = Instant::now();
        assert_eq!(timer.poll(now + secs(10)), 0);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = TickTimer::default();
        let t0 = Instant::now();
        timer.arm(t0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(999)), 0);
        assert_eq!(timer.poll(t0 + secs(1)), 1);
        assert_eq!(timer.poll(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(timer.poll(t0 + secs(3)), 2);
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let mut timer = TickTimer::default();
        let t0 = Instant::now();
        timer.arm(t0);
        assert_eq!(timer.poll(t0 + secs(60)), MAX_CATCH_UP_TICKS);
        // Cadence restarts from the stalled poll
        assert_eq!(timer.poll(t0 + secs(60)), 0);
        assert_eq!(timer.poll(t0 + secs(61)), 1);
    }

    #[test]
    fn test_cancel_stops_pending_ticks() {
        let mut timer = TickTimer::default();
        let t0 = Instant::now();
        let handle = timer.arm(t0);
        timer.cancel();
        assert!(!timer.is_current(handle));
        assert_eq!(timer.poll(t0 + secs(5)), 0);
    }

    #[test]
    fn test_rearm_replaces_previous_handle() {
        let mut timer = TickTimer::default();
        let t0 = Instant::now();
        let first = timer.arm(t0);
        let second = timer.arm(t0 + Duration::from_millis(500));
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));
        // Deadline follows the latest arming only
        assert_eq!(timer.poll(t0 + secs(1)), 0);
        assert_eq!(timer.poll(t0 + Duration::from_millis(1500)), 1);
    }

    #[test]
    fn test_remaining_counts_down() {
        let mut timer = TickTimer::default();
        let t0 = Instant::now();
        assert_eq!(timer.remaining(t0), None);
        timer.arm(t0);
        assert_eq!(
            timer.remaining(t0 + Duration::from_millis(250)),
            Some(Duration::from_millis(750))
        );
    }
}
