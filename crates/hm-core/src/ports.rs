//! Collaborator seams consumed by the provisioning and login flows.
//!
//! The orchestrators never construct their own store clients; they receive
//! these traits at startup so tests can substitute in-memory doubles.

use crate::error::{IdentityResult, StoreResult};
use crate::models::identity::{Identity, NewIdentity};
use crate::models::role::Role;
use crate::models::role_assignment::RoleAssignment;
use crate::models::session::SessionDescriptor;
use crate::models::staff_profile::StaffProfile;
use crate::models::tenant::Tenant;

use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of a successful credential verification.
#[derive(Debug, Clone)]
pub struct SignInOutcome {
    pub identity: Identity,
    pub session: SessionDescriptor,
}

/// A membership row joined with the role catalog. `role_code` is `None`
/// when the join yields no catalog entry.
#[derive(Debug, Clone)]
pub struct Membership {
    pub role_id: Uuid,
    pub role_code: Option<String>,
}

/// Verifies credentials and manages identity records. Password hashing and
/// token issuance happen on the provider's side.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> IdentityResult<SignInOutcome>;

    async fn create_identity(&self, new_identity: &NewIdentity) -> IdentityResult<Identity>;

    async fn delete_identity(&self, id: Uuid) -> IdentityResult<()>;
}

/// Persists tenant records. Slug and code uniqueness is enforced here.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    async fn create_tenant(&self, tenant: &Tenant) -> StoreResult<()>;

    async fn delete_tenant(&self, id: Uuid) -> StoreResult<()>;

    async fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Tenant>>;
}

/// Persists staff profiles and role assignments scoped to (tenant, identity).
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn create_staff_profile(&self, profile: &StaffProfile) -> StoreResult<()>;

    async fn delete_staff_profile(&self, id: Uuid) -> StoreResult<()>;

    async fn create_role_assignment(&self, assignment: &RoleAssignment) -> StoreResult<()>;

    async fn delete_role_assignment(&self, tenant_id: Uuid, identity_id: Uuid) -> StoreResult<()>;

    async fn find_membership(
        &self,
        tenant_id: Uuid,
        identity_id: Uuid,
    ) -> StoreResult<Option<Membership>>;
}

/// Fixed role-code → role lookup, seeded out of band.
#[async_trait]
pub trait RoleCatalog: Send + Sync {
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Role>>;
}
