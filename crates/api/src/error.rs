//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage operation failed.
    #[error("Repository error: {0}")]
    Repository(#[source] RepositoryError),

    /// Bearer token missing, malformed, or failed verification.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Request is not authenticated.
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated but failing a role or ownership check.
    #[error("Forbidden")]
    Forbidden,

    /// Required field absent from the request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unique-key constraint violated under a concurrent write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // A race got past a handler's duplicate handling; report it as
            // a conflict rather than a server fault
            RepositoryError::Duplicate(key) => Self::Conflict(format!("{key} already exists")),
            other => Self::Repository(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; auth rejections are expected traffic
        if matches!(self, Self::Repository(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, body) = match &self {
            Self::Repository(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal server error" }),
            ),
            Self::Token(_) | Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Unauthorized access" }),
            ),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({ "message": "Forbidden access" }),
            ),
            Self::BadRequest(field) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("{field} is required") }),
            ),
            Self::Conflict(msg) => (StatusCode::CONFLICT, json!({ "message": msg })),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("Email".to_string());
        assert_eq!(err.to_string(), "Bad request: Email");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(get_status(AppError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(AppError::BadRequest("Email".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Conflict("duplicate email".to_string())),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_duplicate_key_maps_to_conflict() {
        let err: AppError = RepositoryError::Duplicate("email").into();
        assert_eq!(get_status(err), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_bad_request_body_names_missing_field() {
        let response = AppError::BadRequest("Email".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Email is required");
    }

    #[tokio::test]
    async fn test_unauthorized_body_is_generic() {
        let response = AppError::Unauthorized.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Unauthorized access");
    }
}
