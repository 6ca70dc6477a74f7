//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fault_gauge_events` (gauge): events per window, by gauge, window, kind
//! - `fault_gauge_fail_rate` (gauge): fail rate per window, by gauge, window
//! - `fault_breaker_transitions_total` (counter): breaker state changes
//!
//! # Design Decisions
//! - Uses the `metrics` facade; the Prometheus exporter is opt-in
//! - Empty windows publish counts but no rate, since NaN is not a useful sample

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;

use crate::gauge::{GaugeSnapshot, WindowCounts};

/// Install the Prometheus exporter with an HTTP scrape endpoint at `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Publish both windows of a gauge snapshot under `name`.
pub fn record_fault_snapshot(name: &str, snapshot: &GaugeSnapshot) {
    record_window(name, "current", &snapshot.current);
    record_window(name, "previous", &snapshot.previous);
}

fn record_window(name: &str, window: &'static str, counts: &WindowCounts) {
    for (kind, value) in [
        ("fail", counts.fail),
        ("success", counts.success),
        ("total", counts.total),
    ] {
        metrics::gauge!(
            "fault_gauge_events",
            "gauge" => name.to_owned(),
            "window" => window,
            "kind" => kind
        )
        .set(value as f64);
    }

    if counts.total > 0 {
        metrics::gauge!("fault_gauge_fail_rate", "gauge" => name.to_owned(), "window" => window)
            .set(counts.fail_rate());
    }
}

/// Count a circuit breaker moving into `state`.
pub fn record_breaker_transition(name: &str, state: &'static str) {
    metrics::counter!(
        "fault_breaker_transitions_total",
        "breaker" => name.to_owned(),
        "state" => state
    )
    .increment(1);
}
