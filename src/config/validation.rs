//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (window > 0, threshold within [0, 1])
//! - Check the metrics address parses when metrics are enabled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Short windows are legal but logged, not rejected

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// Windows shorter than this rotate too often to be useful.
pub const RECOMMENDED_MIN_WINDOW_SECS: u64 = 10;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("gauge.window_secs must be greater than zero")]
    ZeroWindow,
    #[error("breaker.failure_rate_threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("reporter.interval_secs must be greater than zero")]
    ZeroReportInterval,
    #[error("observability.metrics_address {0:?} is not a socket address")]
    BadMetricsAddress(String),
}

/// Check a parsed configuration, collecting every violation.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.gauge.window_secs {
        0 => errors.push(ValidationError::ZeroWindow),
        secs if secs < RECOMMENDED_MIN_WINDOW_SECS => {
            tracing::warn!(
                window_secs = secs,
                recommended = RECOMMENDED_MIN_WINDOW_SECS,
                "Gauge window is shorter than recommended"
            );
        }
        _ => {}
    }

    let threshold = config.breaker.failure_rate_threshold;
    if !(0.0..=1.0).contains(&threshold) {
        errors.push(ValidationError::ThresholdOutOfRange(threshold));
    }

    if config.reporter.enabled && config.reporter.interval_secs == 0 {
        errors.push(ValidationError::ZeroReportInterval);
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadMetricsAddress(obs.metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
