//! Tick scheduling decoupled from wall-clock timers.
//!
//! The frame loop reports elapsed time with [`TickScheduler::advance`] and
//! then drains due ticks one at a time with [`TickScheduler::poll_due`]. Tests
//! drive it with synthetic time.

use crate::constants::MAX_FRAME_DT_MS;

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval_ms: u64,
    accumulated_ms: u64,
    active: bool,
}

impl TickScheduler {
    /// A stopped scheduler. A zero interval is treated as 1ms.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            active: false,
        }
    }

    /// Begin scheduling. The first tick is due one full interval from now.
    pub fn start(&mut self) {
        self.active = true;
        self.accumulated_ms = 0;
    }

    /// Stop scheduling and drop any partially elapsed interval.
    pub fn stop(&mut self) {
        self.active = false;
        self.accumulated_ms = 0;
    }

    /// Change the cadence. Takes effect at the next due check.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record elapsed time. Ignored while stopped; clamped per call.
    pub fn advance(&mut self, dt_ms: u64) {
        if !self.active {
            return;
        }
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);
    }

    /// Consume one interval if a tick is due.
    pub fn poll_due(&mut self) -> bool {
        if !self.active || self.accumulated_ms < self.interval_ms {
            return false;
        }
        self.accumulated_ms -= self.interval_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut TickScheduler) -> u32 {
        let mut n = 0;
        while s.poll_due() {
            n += 1;
        }
        n
    }

    #[test]
    fn test_stopped_never_due() {
        let mut s = TickScheduler::new(150);
        s.advance(1000);
        assert!(!s.poll_due());
        assert!(!s.is_active());
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut s = TickScheduler::new(150);
        s.start();
        s.advance(149);
        assert_eq!(drain(&mut s), 0);
        s.advance(1);
        assert_eq!(drain(&mut s), 1);
        s.advance(450);
        assert_eq!(drain(&mut s), 3);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut s = TickScheduler::new(100);
        s.start();
        s.advance(250);
        assert_eq!(drain(&mut s), 2);
        s.advance(50);
        assert_eq!(drain(&mut s), 1);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut s = TickScheduler::new(100);
        s.start();
        s.advance(10_000);
        assert_eq!(drain(&mut s), 5);
    }

    #[test]
    fn test_interval_change_applies_to_next_check() {
        let mut s = TickScheduler::new(150);
        s.start();
        s.advance(300);
        assert!(s.poll_due());
        s.set_interval(145);
        // 150ms left over, one 145ms tick due
        assert!(s.poll_due());
        assert!(!s.poll_due());
        assert_eq!(s.interval_ms(), 145);
    }

    #[test]
    fn test_stop_discards_progress() {
        let mut s = TickScheduler::new(100);
        s.start();
        s.advance(90);
        s.stop();
        s.start();
        s.advance(20);
        assert!(!s.poll_due());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut s = TickScheduler::new(0);
        assert_eq!(s.interval_ms(), 1);
        s.set_interval(0);
        assert_eq!(s.interval_ms(), 1);
    }
}
