//! Periodic gauge reporting.
//!
//! # Responsibilities
//! - Periodically snapshot every registered gauge
//! - Log each snapshot and publish it as metrics

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time;

use crate::clock::Clock;
use crate::config::ReporterConfig;
use crate::gauge::FaultGauge;
use crate::observability::metrics;

pub struct SnapshotReporter<C> {
    gauges: Vec<(String, Arc<FaultGauge<C>>)>,
    config: ReporterConfig,
}

impl<C: Clock> SnapshotReporter<C> {
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            gauges: Vec::new(),
            config,
        }
    }

    /// Add a gauge to report under `name`.
    pub fn register(&mut self, name: impl Into<String>, gauge: Arc<FaultGauge<C>>) {
        self.gauges.push((name.into(), gauge));
    }

    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        if !self.config.enabled {
            tracing::info!("Gauge reporting disabled");
            return;
        }

        tracing::info!(
            interval = self.config.interval_secs,
            gauges = self.gauges.len(),
            "Snapshot reporter starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs.max(1)));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.report_all();
                }
                _ = shutdown.recv() => {
                    tracing::info!("Snapshot reporter received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Snapshot and publish every gauge once.
    pub fn report_all(&self) {
        for (name, gauge) in &self.gauges {
            let snapshot = gauge.snapshot();

            tracing::info!(
                gauge = %name,
                current_fail = snapshot.current.fail,
                current_total = snapshot.current.total,
                previous_fail = snapshot.previous.fail,
                previous_total = snapshot.previous.total,
                "Fault gauge snapshot"
            );

            metrics::record_fault_snapshot(name, &snapshot);
        }
    }
}
