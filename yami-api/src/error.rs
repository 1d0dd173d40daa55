//! Error handling for the API server
//!
//! One unified error type that maps to HTTP responses. Handlers return
//! `Result<T, ApiError>` and the conversion to a status code and JSON body
//! happens in one place.
//!
//! # Response bodies
//!
//! Authentication, authorization, and server errors use
//! `{"error": "..."}`; a bad request uses `{"message": "..."}`. The shapes
//! are part of the deployed API contract and are asserted by the
//! integration tests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use yami_shared::auth::{AuthzError, TokenError};
use yami_shared::directory::DirectoryError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - missing or empty required fields
    BadRequest(String),

    /// Unauthorized (401) - no credential presented
    Unauthorized,

    /// Forbidden (403) - invalid token or missing admin group
    Forbidden(String),

    /// Internal server error (500)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized => write!(f, "Unauthorized"),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

/// Every token verification failure maps to the same client-facing 403;
/// the discriminated variants exist for logging.
impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        tracing::warn!("token verification failed: {}", err);
        ApiError::Forbidden("Invalid token".to_string())
    }
}

impl From<AuthzError> for ApiError {
    fn from(err: AuthzError) -> Self {
        match err {
            AuthzError::MissingGroup { .. } => {
                ApiError::Forbidden("Access Denied. Admins only.".to_string())
            }
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Missing userId".to_string());
        assert_eq!(err.to_string(), "Bad request: Missing userId");

        let err = ApiError::Forbidden("Invalid token".to_string());
        assert_eq!(err.to_string(), "Forbidden: Invalid token");
    }

    #[test]
    fn test_token_error_maps_to_forbidden() {
        let err: ApiError = TokenError::Expired.into();
        assert!(matches!(err, ApiError::Forbidden(msg) if msg == "Invalid token"));

        let err: ApiError = TokenError::KeyNotFound("kid-1".to_string()).into();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_authz_error_maps_to_admins_only() {
        let err: ApiError = AuthzError::MissingGroup {
            group: "Admins".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Forbidden(msg) if msg == "Access Denied. Admins only."));
    }

    #[test]
    fn test_directory_error_keeps_provider_text() {
        let err: ApiError = DirectoryError::Provider("throttled".to_string()).into();
        assert!(matches!(err, ApiError::Internal(msg) if msg.contains("throttled")));
    }
}
