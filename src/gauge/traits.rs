//! Capabilities the gauge exposes to its collaborators.

use std::sync::Arc;

use crate::clock::Clock;
use crate::gauge::fault_gauge::FaultGauge;
use crate::gauge::window::WindowCounts;

/// Reports the fail rate of the current and previous windows respectively.
pub trait FailRate {
    fn fail_rate(&self) -> (f64, f64);
}

/// Feeds outcomes into a gauge and reads its counters.
///
/// Every accessor returns `(current, previous)`.
pub trait Controller {
    fn record_failure(&self);
    fn record_success(&self);

    fn fail_count(&self) -> (u64, u64);
    fn success_count(&self) -> (u64, u64);
    fn total_count(&self) -> (u64, u64);

    /// Both windows' counts from a single read, so volume and rate agree.
    fn counts(&self) -> (WindowCounts, WindowCounts);
}

impl<C: Clock> FailRate for FaultGauge<C> {
    fn fail_rate(&self) -> (f64, f64) {
        FaultGauge::fail_rate(self)
    }
}

impl<C: Clock> Controller for FaultGauge<C> {
    fn record_failure(&self) {
        FaultGauge::record_failure(self)
    }

    fn record_success(&self) {
        FaultGauge::record_success(self)
    }

    fn fail_count(&self) -> (u64, u64) {
        FaultGauge::fail_count(self)
    }

    fn success_count(&self) -> (u64, u64) {
        FaultGauge::success_count(self)
    }

    fn total_count(&self) -> (u64, u64) {
        FaultGauge::total_count(self)
    }

    fn counts(&self) -> (WindowCounts, WindowCounts) {
        FaultGauge::counts(self)
    }
}

impl<T: FailRate + ?Sized> FailRate for Arc<T> {
    fn fail_rate(&self) -> (f64, f64) {
        (**self).fail_rate()
    }
}

impl<T: Controller + ?Sized> Controller for Arc<T> {
    fn record_failure(&self) {
        (**self).record_failure()
    }

    fn record_success(&self) {
        (**self).record_success()
    }

    fn fail_count(&self) -> (u64, u64) {
        (**self).fail_count()
    }

    fn success_count(&self) -> (u64, u64) {
        (**self).success_count()
    }

    fn total_count(&self) -> (u64, u64) {
        (**self).total_count()
    }

    fn counts(&self) -> (WindowCounts, WindowCounts) {
        (**self).counts()
    }
}
