//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_requests_total` (counter): page requests by page, status
//! - `catalog_request_duration_seconds` (histogram): handler latency by page
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder it is a no-op
//! - The Prometheus endpoint is opt-in via config

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::Page;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one handled page request.
pub fn record_page(page: Page, status: StatusCode, start: Instant) {
    ::metrics::counter!(
        "catalog_requests_total",
        "page" => page.as_str(),
        "status" => status.as_u16().to_string()
    )
    .increment(1);
    ::metrics::histogram!("catalog_request_duration_seconds", "page" => page.as_str())
        .record(start.elapsed().as_secs_f64());
}
