//! Observability stubs (metrics, tracing)

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    inputs_accepted: AtomicU64,
    inputs_rejected: AtomicU64,
    probes_succeeded: AtomicU64,
    probes_exhausted: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_accepted(&self) {
        self.inputs_accepted.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "inputs_accepted", "Metric incremented");
    }

    pub fn input_rejected(&self) {
        self.inputs_rejected.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "inputs_rejected", "Metric incremented");
    }

    pub fn probe_succeeded(&self) {
        self.probes_succeeded.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "probes_succeeded", "Metric incremented");
    }

    pub fn probe_exhausted(&self) {
        self.probes_exhausted.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "probes_exhausted", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inputs_accepted: self.inputs_accepted.load(Ordering::Relaxed),
            inputs_rejected: self.inputs_rejected.load(Ordering::Relaxed),
            probes_succeeded: self.probes_succeeded.load(Ordering::Relaxed),
            probes_exhausted: self.probes_exhausted.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub inputs_accepted: u64,
    pub inputs_rejected: u64,
    pub probes_succeeded: u64,
    pub probes_exhausted: u64,
}
