//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to target:
//!     → circuit_breaker.rs allow_request() (fail fast while open)
//!     → outcome reported via record_success() / record_failure()
//!     → FaultGauge (windowed counts)
//!     → circuit_breaker.rs (trip on current-window fail rate)
//! ```
//!
//! # Design Decisions
//! - The breaker depends on the gauge's `Controller` + `FailRate` traits only
//! - Circuit breaker prevents cascading failures

pub mod circuit_breaker;

pub use circuit_breaker::{BreakerState, CircuitBreaker};
