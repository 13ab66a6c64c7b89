//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define gateway metrics (request counts, latency)
//! - Expose a Prometheus-compatible metrics endpoint
//! - Track every inbound request by method, route, and status
//!
//! # Metrics
//! - `gateway_requests_total` (counter): total requests by method, route, status
//! - `gateway_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - The route label is the matched route pattern, never the raw path, so
//!   label cardinality stays bounded
//! - The exporter is optional; when disabled, recording macros are no-ops

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Histogram buckets tuned for typical forwarding latencies.
const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Start the Prometheus exporter on `address`.
///
/// Failures are logged rather than fatal; the gateway serves traffic with
/// or without an exporter.
pub fn init_metrics(address: SocketAddr) {
    let builder = match PrometheusBuilder::new().set_buckets(LATENCY_BUCKETS) {
        Ok(builder) => builder.with_http_listener(address),
        Err(e) => {
            tracing::error!(error = %e, "Failed to configure metrics buckets");
            return;
        }
    };

    match builder.install() {
        Ok(()) => {
            describe_counter!(
                "gateway_requests_total",
                "Total requests by method, route, and status"
            );
            describe_histogram!(
                "gateway_request_duration_seconds",
                "Request duration in seconds"
            );
            tracing::info!(address = %address, "Metrics exporter listening");
        }
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Middleware recording one observation per inbound request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_request(&method, &route, response.status().as_u16(), started);
    response
}

/// Record a completed request with labels.
pub fn record_request(method: &str, route: &str, status: u16, started: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!("gateway_requests_total", &labels).increment(1);
    histogram!("gateway_request_duration_seconds", &labels)
        .record(started.elapsed().as_secs_f64());
}
