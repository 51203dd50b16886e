//! Role assignment - grants an identity a role within a tenant.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// At most one assignment exists per (tenant, identity) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub tenant_id: Uuid,
    pub identity_id: Uuid,
    pub role_id: Uuid,
}

impl RoleAssignment {
    pub fn new(tenant_id: Uuid, identity_id: Uuid, role_id: Uuid) -> Self {
        Self {
            tenant_id,
            identity_id,
            role_id,
        }
    }
}
