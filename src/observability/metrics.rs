//! Metrics collection and exposition.
//!
//! # Metrics
//! - `squad_page_upstream_requests_total` (counter): content service calls by
//!   resource, method and status (`error` when no response arrived)
//! - `squad_page_upstream_request_duration_seconds` (histogram): call latency
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and serve it on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one call to the content service.
pub fn record_upstream(resource: &str, method: &str, status: &str, start: Instant) {
    counter!(
        "squad_page_upstream_requests_total",
        "resource" => resource.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "squad_page_upstream_request_duration_seconds",
        "resource" => resource.to_string(),
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
