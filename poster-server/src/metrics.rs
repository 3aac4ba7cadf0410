//! Prometheus metrics for poster-server.
//!
//! Provides metrics collection and a Prometheus-compatible `/metrics` endpoint.

use axum::extract::State;
use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use poster_core::ElementType;

// Metric names as constants for consistency
const ELEMENTS_ADDED_TOTAL: &str = "poster_elements_added_total";
const ELEMENT_UPDATES_TOTAL: &str = "poster_element_updates_total";
const UNKNOWN_ACTIONS_TOTAL: &str = "poster_unknown_actions_total";
const VALIDATION_FAILURES_TOTAL: &str = "poster_validation_failures_total";

/// Initialize metrics and return the Prometheus handle.
///
/// # Errors
///
/// Returns an error if the Prometheus recorder cannot be installed
/// (e.g., if another recorder is already installed).
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Prometheus metrics endpoint.
#[tracing::instrument(name = "metrics", skip(handle))]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}

/// Record an element added through the dispatch endpoint.
pub fn record_element_added(element_type: ElementType) {
    counter!(ELEMENTS_ADDED_TOTAL, "kind" => element_type.as_str()).increment(1);
}

/// Record an update request and whether it matched an element.
pub fn record_element_update(matched: bool) {
    counter!(ELEMENT_UPDATES_TOTAL, "matched" => if matched { "true" } else { "false" })
        .increment(1);
}

/// Record a dispatch request with an unknown action tag.
pub fn record_unknown_action() {
    counter!(UNKNOWN_ACTIONS_TOTAL).increment(1);
}

/// Record a validation failure.
pub fn record_validation_failure(field: &'static str) {
    counter!(VALIDATION_FAILURES_TOTAL, "field" => field).increment(1);
}
