//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for a fault monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// Window settings for the gauge.
    pub gauge: GaugeConfig,

    /// Circuit breaker fed by the gauge.
    pub breaker: BreakerConfig,

    /// Periodic snapshot reporting.
    pub reporter: ReporterConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Gauge configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GaugeConfig {
    /// Window length in seconds. 10 or more is recommended.
    pub window_secs: u64,
}

impl GaugeConfig {
    pub fn window_length(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self { window_secs: 10 }
    }
}

/// Circuit breaker configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BreakerConfig {
    /// Current-window fail rate at or above which the breaker opens.
    pub failure_rate_threshold: f64,

    /// Events required in the current window before the rate is trusted.
    pub min_requests: u64,

    /// Seconds to stay open before admitting a probe.
    pub open_secs: u64,
}

impl BreakerConfig {
    pub fn open_duration(&self) -> Duration {
        Duration::from_secs(self.open_secs)
    }
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_rate_threshold: 0.5,
            min_requests: 20,
            open_secs: 30,
        }
    }
}

/// Snapshot reporter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReporterConfig {
    /// Enable periodic reporting.
    pub enabled: bool,

    /// Reporting interval in seconds.
    pub interval_secs: u64,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Prometheus endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
