//! Windowed fault-rate gauge.
//!
//! Tracks failures against total operations over fixed, clock-aligned
//! windows and reports the current window next to the one before it, so a
//! circuit breaker or load shedder can compare recent behavior with the prior
//! period.
//!
//! ```
//! use std::time::Duration;
//! use fault_gauge::FaultGauge;
//!
//! let gauge = FaultGauge::new(Duration::from_secs(10));
//! gauge.record_success();
//! gauge.record_failure();
//!
//! // Both events land in the current window unless a boundary fell between them.
//! let (current, previous) = gauge.total_count();
//! assert_eq!(current + previous, 2);
//! ```

// Core
pub mod clock;
pub mod gauge;

// Collaborators
pub mod health;
pub mod resilience;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::MonitorConfig;
pub use gauge::{Controller, FailRate, FaultGauge, GaugeSnapshot, WindowCounts};
pub use resilience::{BreakerState, CircuitBreaker};
