//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The Host header is not on the allow-list.
    #[error("host not allowed: {0}")]
    HostNotAllowed(String),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::HostNotAllowed(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from(ValidationError::TooManyElements);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::HostNotAllowed("x".into()).status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::HostNotAllowed("evil.example".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
