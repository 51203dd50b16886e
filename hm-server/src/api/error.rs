//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses with
//! appropriate HTTP status codes. Bodies follow the
//! `{success:false, message, errors?}` wire format.

use hm_auth::AuthError;

use std::collections::HashMap;
use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    /// Field-level messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Invalid credentials (401)
    #[error("Authentication failed: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but no access to the tenant (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Dependency or internal failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message, errors) = match self {
            ApiError::Validation { message, field, .. } => {
                let errors = field.map(|f| HashMap::from([(f, vec![message.clone()])]));
                (StatusCode::BAD_REQUEST, message, errors)
            }
            ApiError::Unauthorized { message, .. } => (StatusCode::UNAUTHORIZED, message, None),
            ApiError::Forbidden { message, .. } => (StatusCode::FORBIDDEN, message, None),
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message, None),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                message,
                errors,
            }),
        )
            .into_response()
    }
}

/// Map the flow-level taxonomy onto HTTP. The message of a dependency
/// failure is passed through; it names the first failing saga step.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            AuthError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            AuthError::Authentication { message, .. } => ApiError::Unauthorized { message, location },
            AuthError::Authorization { message, .. } => ApiError::Forbidden { message, location },
            AuthError::NotFound { message, .. } => ApiError::NotFound { message, location },
            AuthError::Dependency { message, .. } => ApiError::Internal { message, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
