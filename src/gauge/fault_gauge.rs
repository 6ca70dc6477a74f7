//! The fault gauge.
//!
//! # Responsibilities
//! - Bucket fail/success events into clock-aligned windows
//! - Keep the current window and a frozen copy of the one before it
//! - Serve `(current, previous)` pairs for counts and fail rates
//!
//! # Design Decisions
//! - One lock covers the clock read, the rotation check and the increment,
//!   so two callers can never both rotate for the same boundary
//! - Readers take the same lock and always see a fully rotated state
//! - Rotation is a single-step shift: after an idle gap longer than a window,
//!   "previous" holds whatever was current last, however old it is

use parking_lot::Mutex;
use serde::Serialize;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::GaugeConfig;
use crate::gauge::window::{truncate, WindowCounts};

/// Point-in-time copy of a gauge's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeSnapshot {
    pub window_length: Duration,
    /// Start of the current window since the epoch, unset before any event.
    pub current_start: Option<Duration>,
    pub previous_start: Option<Duration>,
    pub current: WindowCounts,
    pub previous: WindowCounts,
}

#[derive(Debug, Default)]
struct Windows {
    current_start: Option<Duration>,
    previous_start: Option<Duration>,
    current: WindowCounts,
    previous: WindowCounts,
}

/// Tracks the fail rate of one monitored target over rolling windows.
#[derive(Debug)]
pub struct FaultGauge<C = SystemClock> {
    window_length: Duration,
    clock: C,
    windows: Mutex<Windows>,
}

impl FaultGauge<SystemClock> {
    /// Create a gauge on the system clock.
    ///
    /// A window of 10 seconds or more is recommended; shorter windows rotate
    /// often enough that "previous" carries little signal.
    pub fn new(window_length: Duration) -> Self {
        Self::with_clock(window_length, SystemClock)
    }

    pub fn from_config(config: &GaugeConfig) -> Self {
        Self::new(config.window_length())
    }
}

impl<C: Clock> FaultGauge<C> {
    /// Create a gauge reading time from `clock`.
    pub fn with_clock(window_length: Duration, clock: C) -> Self {
        Self {
            window_length,
            clock,
            windows: Mutex::new(Windows::default()),
        }
    }

    pub fn window_length(&self) -> Duration {
        self.window_length
    }

    /// Register one failed operation.
    pub fn record_failure(&self) {
        self.sample(true);
    }

    /// Register one successful operation.
    pub fn record_success(&self) {
        self.sample(false);
    }

    /// Fraction of failures in the current and previous windows.
    ///
    /// A window without events yields NaN; check [`total_count`] first when
    /// that matters.
    ///
    /// [`total_count`]: FaultGauge::total_count
    pub fn fail_rate(&self) -> (f64, f64) {
        let w = self.windows.lock();
        (w.current.fail_rate(), w.previous.fail_rate())
    }

    pub fn fail_count(&self) -> (u64, u64) {
        let w = self.windows.lock();
        (w.current.fail, w.previous.fail)
    }

    pub fn success_count(&self) -> (u64, u64) {
        let w = self.windows.lock();
        (w.current.success, w.previous.success)
    }

    pub fn total_count(&self) -> (u64, u64) {
        let w = self.windows.lock();
        (w.current.total, w.previous.total)
    }

    /// Current and previous window counts read in one critical section.
    pub fn counts(&self) -> (WindowCounts, WindowCounts) {
        let w = self.windows.lock();
        (w.current, w.previous)
    }

    /// Copy the whole state in one critical section.
    pub fn snapshot(&self) -> GaugeSnapshot {
        let w = self.windows.lock();
        GaugeSnapshot {
            window_length: self.window_length,
            current_start: w.current_start,
            previous_start: w.previous_start,
            current: w.current,
            previous: w.previous,
        }
    }

    fn sample(&self, failed: bool) {
        let mut w = self.windows.lock();

        let window_start = truncate(self.clock.now(), self.window_length);
        if w.current_start != Some(window_start) {
            w.previous_start = w.current_start;
            w.previous = std::mem::take(&mut w.current);
            w.current_start = Some(window_start);

            tracing::debug!(
                window_start_ms = window_start.as_millis() as u64,
                previous_fail = w.previous.fail,
                previous_success = w.previous.success,
                "Fault gauge rotated to new window"
            );
        }

        w.current.record(failed);
    }
}
