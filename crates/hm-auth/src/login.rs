//! Login resolution: credentials, then tenant, then membership.
//!
//! The order is fixed. Credentials are verified before any tenant lookup,
//! and each stage maps to its own error class so the API can answer
//! 401 / 404 / 403 distinctly. The flow is read-only; nothing to compensate.

use crate::error::{AuthError, Result as AuthResult};
use crate::validate;

use hm_core::{
    DEFAULT_ROLE, IdentityProvider, MembershipStore, SessionDescriptor, TenantDirectory, slug,
};

use std::sync::Arc;

use log::debug;
use uuid::Uuid;

/// Login input, validated before the provider is called.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub hotel_code: String,
}

/// The tenant as presented to an authorized caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantSummary {
    pub id: Uuid,
    pub name: String,
    pub code: String,
}

/// A verified session scoped to a tenant and role.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub hotel: TenantSummary,
    pub role: String,
    pub session: SessionDescriptor,
}

pub struct AuthorizationResolver {
    identity: Arc<dyn IdentityProvider>,
    tenants: Arc<dyn TenantDirectory>,
    memberships: Arc<dyn MembershipStore>,
}

impl AuthorizationResolver {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        tenants: Arc<dyn TenantDirectory>,
        memberships: Arc<dyn MembershipStore>,
    ) -> Self {
        Self {
            identity,
            tenants,
            memberships,
        }
    }

    pub async fn authorize(&self, request: &LoginRequest) -> AuthResult<LoginOutcome> {
        validate::login(request)?;

        let signed_in = self
            .identity
            .sign_in(&request.email, &request.password)
            .await
            .map_err(|e| {
                if e.is_invalid_credentials() {
                    AuthError::authentication("Invalid credentials")
                } else {
                    AuthError::dependency(format!("Identity provider unavailable: {}", e))
                }
            })?;

        let tenant_slug = slug::code_to_slug(&request.hotel_code);
        let tenant = self
            .tenants
            .find_by_slug(&tenant_slug)
            .await
            .map_err(|e| AuthError::dependency(format!("Could not look up tenant: {}", e)))?
            .ok_or_else(|| AuthError::not_found("Invalid hotel code"))?;

        let membership = self
            .memberships
            .find_membership(tenant.id, signed_in.identity.id)
            .await
            .map_err(|e| AuthError::dependency(format!("Could not look up membership: {}", e)))?
            .ok_or_else(|| AuthError::authorization("No access to this hotel"))?;

        let role = membership
            .role_code
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        debug!(
            "Authorized {} for tenant {} as {}",
            request.email, tenant.slug, role
        );

        Ok(LoginOutcome {
            hotel: TenantSummary {
                id: tenant.id,
                code: tenant.public_code(),
                name: tenant.name,
            },
            role,
            session: signed_in.session,
        })
    }
}
