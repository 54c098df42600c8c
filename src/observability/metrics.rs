//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define quiz service metrics (requests, latency, registrations, answers)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `quiz_requests_total` (counter): API requests by method, endpoint, status
//! - `quiz_request_duration_seconds` (histogram): API latency distribution
//! - `quiz_registrations_total` (counter): registered participants by quiz
//! - `quiz_answers_total` (counter): submitted answers by quiz and correctness
//! - `quiz_ws_connections` (gauge): open leaderboard sockets
//!
//! # Design Decisions
//! - Recording without an installed exporter is a no-op
//! - Labels for quiz id, endpoint, status code

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed API request.
pub fn record_request(method: &str, endpoint: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("quiz_requests_total", &labels).increment(1);
    metrics::histogram!("quiz_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_registration(quiz_id: &str) {
    metrics::counter!("quiz_registrations_total", "quiz" => quiz_id.to_string()).increment(1);
}

pub fn record_answer(quiz_id: &str, correct: bool) {
    metrics::counter!(
        "quiz_answers_total",
        "quiz" => quiz_id.to_string(),
        "correct" => if correct { "true" } else { "false" }
    )
    .increment(1);
}

pub fn ws_connected() {
    metrics::gauge!("quiz_ws_connections").increment(1.0);
}

pub fn ws_disconnected() {
    metrics::gauge!("quiz_ws_connections").decrement(1.0);
}
