// ticker.rs - Repeating schedule polled by a frame-driven host

use std::time::{Duration, Instant};

use crate::config::TICK_INTERVAL;

/// Fixed-interval repeating timer with no cancellation.
///
/// The host polls it whether or not the simulation is running; overdue
/// firings collapse into one so a stalled frame never triggers a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fired: Instant,
}

impl Ticker {
    pub fn new(now: Instant) -> Self {
        Self::with_interval(TICK_INTERVAL, now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        Self { interval, last_fired: now }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fires at most once per call; re-arms from `now` when it does.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next firing, for scheduling a repaint.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_fired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let ticker = Ticker::new(Instant::now());
        assert_eq!(ticker.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start);

        assert!(!ticker.fire_if_due(start));
        assert!(!ticker.fire_if_due(start + Duration::from_millis(99)));
        assert!(ticker.fire_if_due(start + Duration::from_millis(100)));
        assert!(!ticker.fire_if_due(start + Duration::from_millis(150)));
        assert!(ticker.fire_if_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_overdue_firings_coalesce() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start);
        let late = start + Duration::from_millis(1000);

        assert!(ticker.fire_if_due(late));
        assert!(!ticker.fire_if_due(late + Duration::from_millis(10)));
        assert_eq!(ticker.until_next(late + Duration::from_millis(10)), Duration::from_millis(90));
    }
}
