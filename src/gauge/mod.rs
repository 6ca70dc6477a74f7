//! Fault-rate gauge subsystem.
//!
//! # Data Flow
//! ```text
//! record_failure() / record_success()
//!     → clock reading (UTC, since epoch)
//!     → window.rs (truncate to window boundary)
//!     → fault_gauge.rs (rotate if boundary changed, then count)
//!
//! fail_rate() / *_count() / snapshot()
//!     → fault_gauge.rs (read both windows under the same lock)
//! ```
//!
//! # Design Decisions
//! - Windows align to absolute clock boundaries, not to gauge creation
//! - Only "current" and "previous" are kept; older windows are dropped
//! - Empty windows report a NaN rate instead of an error
//! - Collaborators depend on the `Controller` / `FailRate` traits, not on
//!   the concrete gauge

pub mod fault_gauge;
pub mod traits;
pub mod window;

pub use fault_gauge::{FaultGauge, GaugeSnapshot};
pub use traits::{Controller, FailRate};
pub use window::{truncate, WindowCounts};
