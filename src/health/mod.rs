//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Snapshot reporter (reporter.rs):
//!     Periodic timer
//!     → Snapshot each registered gauge
//!     → Log + publish metrics
//! ```
//!
//! # Design Decisions
//! - Reporting reads gauges and never mutates them, so it cannot rotate a window
//! - Stops on the shared broadcast shutdown signal

pub mod reporter;

pub use reporter::SnapshotReporter;
