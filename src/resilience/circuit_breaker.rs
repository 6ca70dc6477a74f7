//! Circuit breaker driven by a fault gauge.
//!
//! # States
//! - Closed: normal operation, requests pass through
//! - Open: target assumed down, requests fail fast
//! - Half-Open: testing if target recovered
//!
//! # State Transitions
//! ```text
//! Closed → Open: current-window fail rate >= threshold, with enough volume
//! Open → Half-Open: after the open duration
//! Half-Open → Closed: probe request succeeds
//! Half-Open → Open: probe request fails
//! ```
//!
//! # Design Decisions
//! - One breaker per monitored target, owning its own gauge
//! - Fail fast in Open state (no waiting for timeout)
//! - Single probe in Half-Open (prevents hammering recovering target)
//! - A probe nobody reports on expires after the open duration
//! - An empty window's NaN rate never trips the breaker

use parking_lot::Mutex;
use std::fmt;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::BreakerConfig;
use crate::gauge::{Controller, FailRate};
use crate::observability::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

impl BreakerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakerState::Closed => "closed",
            BreakerState::Open => "open",
            BreakerState::HalfOpen => "half_open",
        }
    }
}

impl fmt::Display for BreakerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
struct Inner {
    state: BreakerState,
    opened_at: Duration,
    probe_in_flight: bool,
    probe_started: Duration,
}

/// Gates calls to one target based on the fail rate its gauge reports.
#[derive(Debug)]
pub struct CircuitBreaker<G, C = SystemClock> {
    name: String,
    gauge: G,
    config: BreakerConfig,
    clock: C,
    inner: Mutex<Inner>,
}

impl<G: Controller + FailRate> CircuitBreaker<G, SystemClock> {
    pub fn new(name: impl Into<String>, gauge: G, config: BreakerConfig) -> Self {
        Self::with_clock(name, gauge, config, SystemClock)
    }
}

impl<G: Controller + FailRate, C: Clock> CircuitBreaker<G, C> {
    pub fn with_clock(name: impl Into<String>, gauge: G, config: BreakerConfig, clock: C) -> Self {
        Self {
            name: name.into(),
            gauge,
            config,
            clock,
            inner: Mutex::new(Inner {
                state: BreakerState::Closed,
                opened_at: Duration::ZERO,
                probe_in_flight: false,
                probe_started: Duration::ZERO,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gauge(&self) -> &G {
        &self.gauge
    }

    pub fn state(&self) -> BreakerState {
        self.inner.lock().state
    }

    /// Return true if a request may be sent to the target now.
    pub fn allow_request(&self) -> bool {
        let now = self.clock.now();
        let mut inner = self.inner.lock();
        match inner.state {
            BreakerState::Closed => true,
            BreakerState::Open => {
                if now.saturating_sub(inner.opened_at) < self.config.open_duration() {
                    return false;
                }
                self.transition(&mut inner, BreakerState::HalfOpen);
                inner.probe_in_flight = true;
                inner.probe_started = now;
                true
            }
            BreakerState::HalfOpen => {
                let expired =
                    now.saturating_sub(inner.probe_started) >= self.config.open_duration();
                if inner.probe_in_flight && !expired {
                    return false;
                }
                if inner.probe_in_flight {
                    tracing::warn!(breaker = %self.name, "Probe expired without an outcome");
                }
                inner.probe_in_flight = true;
                inner.probe_started = now;
                true
            }
        }
    }

    /// Report a successful request.
    pub fn record_success(&self) {
        self.gauge.record_success();

        let mut inner = self.inner.lock();
        if inner.state == BreakerState::HalfOpen {
            inner.probe_in_flight = false;
            self.transition(&mut inner, BreakerState::Closed);
        }
    }

    /// Report a failed request.
    pub fn record_failure(&self) {
        self.gauge.record_failure();

        let mut inner = self.inner.lock();
        match inner.state {
            BreakerState::HalfOpen => {
                inner.probe_in_flight = false;
                self.open(&mut inner);
            }
            BreakerState::Closed => {
                let (current, _) = self.gauge.counts();
                let rate = current.fail_rate();
                // NaN compares false, so an empty window never trips.
                if current.total >= self.config.min_requests
                    && rate >= self.config.failure_rate_threshold
                {
                    tracing::warn!(
                        breaker = %self.name,
                        fail_rate = rate,
                        requests = current.total,
                        threshold = self.config.failure_rate_threshold,
                        "Fail rate exceeded threshold"
                    );
                    self.open(&mut inner);
                }
            }
            BreakerState::Open => {}
        }
    }

    fn open(&self, inner: &mut Inner) {
        inner.opened_at = self.clock.now();
        self.transition(inner, BreakerState::Open);
    }

    fn transition(&self, inner: &mut Inner, to: BreakerState) {
        let from = inner.state;
        inner.state = to;
        if to == BreakerState::Closed {
            tracing::info!(breaker = %self.name, %from, %to, "Circuit breaker state change");
        } else {
            tracing::warn!(breaker = %self.name, %from, %to, "Circuit breaker state change");
        }
        metrics::record_breaker_transition(&self.name, to.as_str());
    }
}
