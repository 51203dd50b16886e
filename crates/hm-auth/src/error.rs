//! Failure taxonomy for the provisioning and login flows.
//!
//! Validation rejects before any side effect. Uniqueness conflicts are
//! absorbed by the saga's retry loop and only ever surface as `Dependency`
//! once retries are exhausted. Compensation shortfalls never change the
//! class of the error reported to the caller.

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed input, surfaced as a field-level message (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad credentials (401)
    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not a member of the tenant (403)
    #[error("Not authorized: {message} {location}")]
    Authorization {
        message: String,
        location: ErrorLocation,
    },

    /// Tenant code resolved to nothing (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Downstream failure, including timeouts and exhausted retries (500)
    #[error("Dependency failure: {message} {location}")]
    Dependency {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        AuthError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        AuthError::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authorization<S: Into<String>>(message: S) -> Self {
        AuthError::Authorization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        AuthError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn dependency<S: Into<String>>(message: S) -> Self {
        AuthError::Dependency {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, AuthError>;
