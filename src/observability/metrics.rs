//! Metrics collection and exposition.
//!
//! # Metrics
//! - `scanner_attempts_total` (counter): completed attempts by outcome
//! - `scanner_probe_duration_seconds` (histogram): ledger lookup latency
//! - `scanner_findings_total` (counter): funded addresses recorded
//! - `scanner_in_flight` (gauge): attempts currently running
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade and is a no-op until an
//!   exporter is installed
//! - The Prometheus exporter is opt-in (`observability.metrics_enabled`)

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed attempt.
pub fn record_attempt(outcome: &'static str) {
    metrics::counter!("scanner_attempts_total", "outcome" => outcome).increment(1);
}

/// Record the latency of one ledger lookup.
pub fn record_probe_duration(elapsed: Duration) {
    metrics::histogram!("scanner_probe_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record a funded address.
pub fn record_finding() {
    metrics::counter!("scanner_findings_total").increment(1);
}

/// Update the number of attempts currently running.
pub fn record_in_flight(count: usize) {
    metrics::gauge!("scanner_in_flight").set(count as f64);
}
