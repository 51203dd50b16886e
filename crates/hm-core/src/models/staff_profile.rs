//! Staff profile - an identity's membership record within a tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exists only while both the tenant and the identity it links exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub identity_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl StaffProfile {
    pub fn new(tenant_id: Uuid, identity_id: Uuid, full_name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            identity_id,
            full_name,
            email,
            created_at: Utc::now(),
        }
    }
}
