//! Tenant provisioning saga.
//!
//! Registration spans four stores that share no transaction: the identity
//! provider, the tenant directory, the membership store, and the role
//! catalog. The saga keeps an ordered record of every record it has
//! created; when a step fails, that record is unwound in reverse before the
//! caller sees the error, so a failed registration leaves nothing behind.

use crate::error::{AuthError, Result as AuthResult};
use crate::validate;

use hm_core::{
    ADMIN_ROLE, IdentityProvider, MembershipStore, NewIdentity, RoleAssignment, RoleCatalog,
    StaffProfile, SuffixSource, Tenant, TenantDirectory, slug,
};

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

/// Registration input, validated before any side effect.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub full_name: String,
    pub hotel_name: String,
    pub email: String,
    pub password: String,
}

/// Terminal success outcome. No session is issued here; the caller
/// authenticates separately via login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningOutcome {
    pub hotel_code: String,
}

/// A completed creation step, carrying what its undo action needs.
#[derive(Debug, Clone)]
enum AppliedStep {
    IdentityCreated { identity_id: Uuid },
    TenantCreated { tenant_id: Uuid },
    StaffProfileCreated { profile_id: Uuid },
    RoleAssignmentCreated { tenant_id: Uuid, identity_id: Uuid },
}

impl fmt::Display for AppliedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppliedStep::IdentityCreated { identity_id } => {
                write!(f, "identity {}", identity_id)
            }
            AppliedStep::TenantCreated { tenant_id } => write!(f, "tenant {}", tenant_id),
            AppliedStep::StaffProfileCreated { profile_id } => {
                write!(f, "staff profile {}", profile_id)
            }
            AppliedStep::RoleAssignmentCreated {
                tenant_id,
                identity_id,
            } => write!(f, "role assignment ({}, {})", tenant_id, identity_id),
        }
    }
}

pub struct ProvisioningSaga {
    identity: Arc<dyn IdentityProvider>,
    tenants: Arc<dyn TenantDirectory>,
    memberships: Arc<dyn MembershipStore>,
    roles: Arc<dyn RoleCatalog>,
    suffixes: Arc<dyn SuffixSource>,
    max_slug_attempts: u32,
}

impl ProvisioningSaga {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        tenants: Arc<dyn TenantDirectory>,
        memberships: Arc<dyn MembershipStore>,
        roles: Arc<dyn RoleCatalog>,
        suffixes: Arc<dyn SuffixSource>,
        max_slug_attempts: u32,
    ) -> Self {
        Self {
            identity,
            tenants,
            memberships,
            roles,
            suffixes,
            max_slug_attempts,
        }
    }

    /// Run the full registration. On success exactly one identity, tenant,
    /// staff profile, and admin role assignment exist, mutually linked; on
    /// failure every record created along the way has been removed (best
    /// effort, strict reverse creation order) before this returns.
    pub async fn provision(
        &self,
        request: &RegistrationRequest,
    ) -> AuthResult<ProvisioningOutcome> {
        validate::registration(request)?;

        let mut applied: Vec<AppliedStep> = Vec::new();

        match self.run(request, &mut applied).await {
            Ok(outcome) => {
                info!(
                    "Provisioned tenant {} with admin {}",
                    outcome.hotel_code, request.email
                );
                Ok(outcome)
            }
            Err(err) => {
                self.compensate(&applied).await;
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        request: &RegistrationRequest,
        applied: &mut Vec<AppliedStep>,
    ) -> AuthResult<ProvisioningOutcome> {
        // Identity first; nothing exists yet, so a failure here needs no undo.
        let identity = self
            .identity
            .create_identity(&NewIdentity {
                email: request.email.clone(),
                password: request.password.clone(),
                full_name: request.full_name.clone(),
            })
            .await
            .map_err(|e| AuthError::dependency(format!("Could not create identity: {}", e)))?;
        applied.push(AppliedStep::IdentityCreated {
            identity_id: identity.id,
        });

        let tenant = self.create_tenant(&request.hotel_name).await?;
        applied.push(AppliedStep::TenantCreated {
            tenant_id: tenant.id,
        });

        let profile = StaffProfile::new(
            tenant.id,
            identity.id,
            request.full_name.clone(),
            request.email.clone(),
        );
        self.memberships
            .create_staff_profile(&profile)
            .await
            .map_err(|e| AuthError::dependency(format!("Could not create staff profile: {}", e)))?;
        applied.push(AppliedStep::StaffProfileCreated {
            profile_id: profile.id,
        });

        // A missing admin role is a deployment problem, not a user error.
        let admin = self
            .roles
            .find_by_code(ADMIN_ROLE)
            .await
            .map_err(|e| AuthError::dependency(format!("Could not read role catalog: {}", e)))?
            .ok_or_else(|| AuthError::dependency("Admin role is not seeded"))?;

        self.memberships
            .create_role_assignment(&RoleAssignment::new(tenant.id, identity.id, admin.id))
            .await
            .map_err(|e| {
                AuthError::dependency(format!("Could not create role assignment: {}", e))
            })?;
        applied.push(AppliedStep::RoleAssignmentCreated {
            tenant_id: tenant.id,
            identity_id: identity.id,
        });

        Ok(ProvisioningOutcome {
            hotel_code: tenant.public_code(),
        })
    }

    /// Create the tenant, drawing a fresh suffix while the uniqueness
    /// constraint reports collisions. Conflicts never reach the caller
    /// unless the attempt limit runs out.
    async fn create_tenant(&self, hotel_name: &str) -> AuthResult<Tenant> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let identifiers = slug::derive_identifiers(hotel_name, self.suffixes.as_ref());
            let tenant = Tenant::new(hotel_name.to_string(), identifiers);

            match self.tenants.create_tenant(&tenant).await {
                Ok(()) => return Ok(tenant),
                Err(e) if e.is_conflict() && attempt < self.max_slug_attempts => {
                    debug!(
                        "Slug {} already taken (attempt {}), drawing a new suffix",
                        tenant.slug, attempt
                    );
                }
                Err(e) if e.is_conflict() => {
                    return Err(AuthError::dependency(format!(
                        "Could not allocate a unique hotel code after {} attempts",
                        attempt
                    )));
                }
                Err(e) => {
                    return Err(AuthError::dependency(format!(
                        "Could not create tenant: {}",
                        e
                    )));
                }
            }
        }
    }

    /// Undo every applied step, newest first. Runs to completion; a failed
    /// undo is logged and skipped so the remaining records still get
    /// removed, and the original error stays authoritative.
    async fn compensate(&self, applied: &[AppliedStep]) {
        if applied.is_empty() {
            return;
        }

        info!("Compensating {} provisioning step(s)", applied.len());

        for step in applied.iter().rev() {
            match self.undo(step).await {
                Ok(()) => debug!("Compensated {}", step),
                Err(message) => warn!("Compensation failed for {}: {}", step, message),
            }
        }
    }

    async fn undo(&self, step: &AppliedStep) -> Result<(), String> {
        match step {
            AppliedStep::RoleAssignmentCreated {
                tenant_id,
                identity_id,
            } => self
                .memberships
                .delete_role_assignment(*tenant_id, *identity_id)
                .await
                .map_err(|e| e.to_string()),
            AppliedStep::StaffProfileCreated { profile_id } => self
                .memberships
                .delete_staff_profile(*profile_id)
                .await
                .map_err(|e| e.to_string()),
            AppliedStep::TenantCreated { tenant_id } => self
                .tenants
                .delete_tenant(*tenant_id)
                .await
                .map_err(|e| e.to_string()),
            AppliedStep::IdentityCreated { identity_id } => self
                .identity
                .delete_identity(*identity_id)
                .await
                .map_err(|e| e.to_string()),
        }
    }
}
