use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced by the tenant, membership, and role stores.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Retryable when the
    /// conflicting value can be regenerated (slug/code suffixes).
    #[error("Store conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Any other store failure, including timeouts.
    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        StoreError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }
}

/// Failures surfaced by the identity provider.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The provider rejected the email/password pair.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// The provider could not be reached or answered unexpectedly,
    /// including timeouts.
    #[error("Identity provider failure: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        IdentityError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider<S: Into<String>>(message: S) -> Self {
        IdentityError::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, IdentityError::InvalidCredentials { .. })
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
pub type IdentityResult<T> = StdResult<T, IdentityError>;
