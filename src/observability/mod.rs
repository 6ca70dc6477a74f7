//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ObservabilityConfig
//!     → init() (logging first, then the optional metrics endpoint)
//!
//! gauge rotations, breaker transitions, config validation
//!     → logging.rs (structured log events via tracing)
//!
//! SnapshotReporter ticks, breaker transitions
//!     → metrics.rs (gauges and counters via the metrics facade)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - The gauge itself only logs; exporting is left to collaborators
//! - Metrics are cheap and never fail the caller
//! - The metrics address is checked before anything global is installed

pub mod logging;
pub mod metrics;

use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use crate::config::ObservabilityConfig;

/// Error type for observability setup.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("invalid metrics address {address:?}: {source}")]
    MetricsAddress {
        address: String,
        source: AddrParseError,
    },
    #[error("logging already initialized: {0}")]
    Logging(#[from] TryInitError),
    #[error("metrics exporter failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Metrics endpoint to bind, or `None` when metrics are disabled.
pub fn metrics_address(
    config: &ObservabilityConfig,
) -> Result<Option<SocketAddr>, ObservabilityError> {
    if !config.metrics_enabled {
        return Ok(None);
    }
    config
        .metrics_address
        .parse()
        .map(Some)
        .map_err(|source| ObservabilityError::MetricsAddress {
            address: config.metrics_address.clone(),
            source,
        })
}

/// Install logging at the configured level and, when enabled, the
/// Prometheus endpoint.
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let addr = metrics_address(config)?;

    logging::init_logging(&config.log_level)?;

    match addr {
        Some(addr) => metrics::init_metrics(addr)?,
        None => tracing::info!("Metrics endpoint disabled"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_metrics_have_no_address() {
        let config = ObservabilityConfig {
            metrics_enabled: false,
            metrics_address: "not-an-addr".into(),
            ..ObservabilityConfig::default()
        };
        assert_eq!(metrics_address(&config).unwrap(), None);
    }

    #[test]
    fn test_enabled_metrics_parse_address() {
        let config = ObservabilityConfig {
            metrics_enabled: true,
            metrics_address: "127.0.0.1:9464".into(),
            ..ObservabilityConfig::default()
        };
        let expected: SocketAddr = "127.0.0.1:9464".parse().unwrap();
        assert_eq!(metrics_address(&config).unwrap(), Some(expected));
    }

    #[test]
    fn test_bad_address_fails_before_installing_anything() {
        let config = ObservabilityConfig {
            metrics_enabled: true,
            metrics_address: "localhost".into(),
            ..ObservabilityConfig::default()
        };
        match init(&config) {
            Err(ObservabilityError::MetricsAddress { address, .. }) => {
                assert_eq!(address, "localhost")
            }
            other => panic!("expected an address error, got {other:?}"),
        }
    }
}
