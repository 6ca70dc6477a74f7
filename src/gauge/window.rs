//! Window alignment and per-window counters.

use serde::Serialize;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Floor `since_epoch` to a multiple of `window_length`.
///
/// A zero `window_length` leaves the reading untouched, so every distinct
/// reading lands in its own window.
pub fn truncate(since_epoch: Duration, window_length: Duration) -> Duration {
    let t = since_epoch.as_nanos();
    let floored = t - t.checked_rem(window_length.as_nanos()).unwrap_or(0);

    let secs = u64::try_from(floored / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let nanos = (floored % NANOS_PER_SEC) as u32;
    Duration::new(secs, nanos)
}

/// Event counts accumulated in one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowCounts {
    pub fail: u64,
    pub success: u64,
    /// Always `fail + success`.
    pub total: u64,
}

impl WindowCounts {
    /// Fraction of events that failed. NaN when the window is empty.
    pub fn fail_rate(&self) -> f64 {
        self.fail as f64 / self.total as f64
    }

    pub(crate) fn record(&mut self, failed: bool) {
        if failed {
            self.fail += 1;
        } else {
            self.success += 1;
        }
        self.total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_window_boundary() {
        let window = Duration::from_secs(10);
        assert_eq!(truncate(Duration::from_millis(12_345), window), Duration::from_secs(10));
        assert_eq!(truncate(Duration::from_secs(20), window), Duration::from_secs(20));
        assert_eq!(truncate(Duration::from_millis(9_999), window), Duration::ZERO);
    }

    #[test]
    fn test_truncate_sub_second_window() {
        let window = Duration::from_millis(250);
        assert_eq!(
            truncate(Duration::new(1_700_000_000, 600_000_000), window),
            Duration::new(1_700_000_000, 500_000_000)
        );
    }

    #[test]
    fn test_truncate_zero_window_is_identity() {
        let t = Duration::new(42, 7);
        assert_eq!(truncate(t, Duration::ZERO), t);
    }

    #[test]
    fn test_empty_window_rate_is_nan() {
        assert!(WindowCounts::default().fail_rate().is_nan());
    }

    #[test]
    fn test_record_keeps_total_in_step() {
        let mut counts = WindowCounts::default();
        counts.record(true);
        counts.record(false);
        counts.record(false);
        assert_eq!(counts, WindowCounts { fail: 1, success: 2, total: 3 });
        assert!((counts.fail_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
    }
}
