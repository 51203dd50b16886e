//! Role catalog entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role code granted to the administrator created during registration.
pub const ADMIN_ROLE: &str = "admin";

/// Role code assumed when a membership row carries no explicit role code.
pub const DEFAULT_ROLE: &str = "staff";

/// A permission level within a tenant. The catalog is small, seeded out of
/// band, and read-only at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub code: String,
}
