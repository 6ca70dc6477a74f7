//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → FaultGauge::from_config / CircuitBreaker::new / SnapshotReporter::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a gauge's window never changes
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::BreakerConfig;
pub use schema::GaugeConfig;
pub use schema::MonitorConfig;
pub use schema::ObservabilityConfig;
pub use schema::ReporterConfig;
