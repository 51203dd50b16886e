pub mod membership_repository;
pub mod role_repository;
pub mod tenant_repository;

use crate::error::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Parse a stored UUID column with context in the error message.
#[track_caller]
pub(crate) fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse a stored Unix timestamp column.
#[track_caller]
pub(crate) fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Parse a stored JSON column.
#[track_caller]
pub(crate) fn parse_json(column: &str, value: &str) -> DbErrorResult<serde_json::Value> {
    serde_json::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid JSON in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
