//! Metrics collection and exposition.
//!
//! # Metrics
//! - `hotel_requests_total` (counter): page and API requests by route, status
//! - `hotel_request_duration_seconds` (histogram): latency by route
//! - `hotel_catalog_loads_total` (counter): catalog loads by outcome
//! - `hotel_catalog_size` (gauge): hotels in the loaded snapshot
//! - `hotel_bookings_total` (counter): placeholder booking actions
//!
//! Without an installed recorder every call is a no-op.

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a served request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    counter!("hotel_requests_total", "route" => route, "status" => status.to_string())
        .increment(1);
    histogram!("hotel_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a catalog load attempt.
pub fn record_catalog_load(success: bool, size: usize) {
    let outcome = if success { "success" } else { "failure" };
    counter!("hotel_catalog_loads_total", "outcome" => outcome).increment(1);
    if success {
        gauge!("hotel_catalog_size").set(size as f64);
    }
}

pub fn record_booking() {
    counter!("hotel_bookings_total").increment(1);
}
