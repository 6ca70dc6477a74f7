//! Shared utilities for integration and load testing.

use fault_gauge::{FaultGauge, ManualClock};
use std::time::Duration;

/// Build a gauge on a manual clock reading `start_secs`.
#[allow(dead_code)]
pub fn manual_gauge(start_secs: u64, window: Duration) -> (FaultGauge<ManualClock>, ManualClock) {
    let clock = ManualClock::new(Duration::from_secs(start_secs));
    let gauge = FaultGauge::with_clock(window, clock.clone());
    (gauge, clock)
}

/// Replay outcomes written as a string: `f` is a failure, `s` a success.
#[allow(dead_code)]
pub fn replay(gauge: &FaultGauge<ManualClock>, outcomes: &str) {
    for c in outcomes.chars() {
        match c {
            'f' => gauge.record_failure(),
            's' => gauge.record_success(),
            other => panic!("unknown outcome {other:?}"),
        }
    }
}
