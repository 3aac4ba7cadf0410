//! Host header allow-list.
//!
//! When the server is reachable under a public name (e.g. a preview
//! deployment), only the configured hostnames and loopback are served.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::AppState;

/// Reject requests whose Host header is not allowed by the configuration.
pub async fn enforce_allowed_hosts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if state.config().is_host_allowed(&host) {
        next.run(request).await
    } else {
        tracing::warn!(%host, "Rejected request for host not on allow-list");
        ApiError::HostNotAllowed(host).into_response()
    }
}
