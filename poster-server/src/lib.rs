//! # Poster Designer Server Library
//!
//! Shared types and the router for the editor server.
//! This library is used by both the binary and integration tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod config;
pub mod error;
pub mod health;
pub mod hosts;
pub mod metrics;
pub mod routes;
pub mod validation;

pub use config::{CliArgs, ServerConfig};
pub use error::ApiError;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state from a resolved configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            metrics_handle: None,
        }
    }

    /// Serve `/metrics` from the given Prometheus handle.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The Prometheus handle, if metrics are enabled.
    #[must_use]
    pub fn metrics_handle(&self) -> Option<&PrometheusHandle> {
        self.metrics_handle.as_ref()
    }
}

/// Build the application router: views, API, health probes, `/metrics` when
/// the state carries a Prometheus handle, and the request middleware stack.
///
/// Every route sits behind the Host allow-list and request tracing.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(routes::HOME_PATH, get(routes::home))
        .route(routes::EDITOR_PATH, get(routes::editor))
        .route("/api/toolbar", get(routes::toolbar))
        .route("/api/templates", get(routes::templates))
        .route("/api/elements", post(routes::add_element))
        .route("/api/elements/update", post(routes::update_element_handler))
        // Health check endpoints (Kubernetes probes)
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness));

    if let Some(handle) = state.metrics_handle() {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::metrics_handler))
                .with_state(handle.clone()),
        );
    }

    router
        .layer(middleware::from_fn_with_state(
            state.clone(),
            hosts::enforce_allowed_hosts,
        ))
        .layer(
            ServiceBuilder::new()
                // Request ID for tracing correlation
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                // Structured request tracing with timing
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
