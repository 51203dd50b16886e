//! Staff profiles and role assignments, scoped to (tenant, identity).

use crate::error::Result as DbErrorResult;
use crate::repositories::parse_uuid;

use hm_core::{Membership, MembershipStore, RoleAssignment, StaffProfile, StoreError};

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_staff_profile(&self, profile: &StaffProfile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO hm_staff_profiles (id, tenant_id, identity_id, full_name, email, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.tenant_id.to_string())
        .bind(profile.identity_id.to_string())
        .bind(&profile.full_name)
        .bind(&profile.email)
        .bind(profile.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_staff_profile(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM hm_staff_profiles WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn create_role_assignment(&self, assignment: &RoleAssignment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO hm_role_assignments (tenant_id, identity_id, role_id)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(assignment.tenant_id.to_string())
        .bind(assignment.identity_id.to_string())
        .bind(assignment.role_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete_role_assignment(
        &self,
        tenant_id: Uuid,
        identity_id: Uuid,
    ) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM hm_role_assignments WHERE tenant_id = ? AND identity_id = ?")
            .bind(tenant_id.to_string())
            .bind(identity_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// The assignment joined with the role catalog. `role_code` comes back
    /// `None` if the catalog row is gone.
    pub async fn find_membership(
        &self,
        tenant_id: Uuid,
        identity_id: Uuid,
    ) -> DbErrorResult<Option<Membership>> {
        let row = sqlx::query(
            r#"
                SELECT ra.role_id, r.code AS role_code
                FROM hm_role_assignments ra
                LEFT JOIN hm_roles r ON r.id = ra.role_id
                WHERE ra.tenant_id = ? AND ra.identity_id = ?
            "#,
        )
        .bind(tenant_id.to_string())
        .bind(identity_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let role_id: String = r.try_get("role_id")?;
            Ok(Membership {
                role_id: parse_uuid("role_assignment.role_id", &role_id)?,
                role_code: r.try_get("role_code")?,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl MembershipStore for MembershipRepository {
    async fn create_staff_profile(&self, profile: &StaffProfile) -> Result<(), StoreError> {
        MembershipRepository::create_staff_profile(self, profile)
            .await
            .map_err(|e| e.into_store_error())
    }

    async fn delete_staff_profile(&self, id: Uuid) -> Result<(), StoreError> {
        MembershipRepository::delete_staff_profile(self, id)
            .await
            .map_err(|e| e.into_store_error())
    }

    async fn create_role_assignment(&self, assignment: &RoleAssignment) -> Result<(), StoreError> {
        MembershipRepository::create_role_assignment(self, assignment)
            .await
            .map_err(|e| e.into_store_error())
    }

    async fn delete_role_assignment(
        &self,
        tenant_id: Uuid,
        identity_id: Uuid,
    ) -> Result<(), StoreError> {
        MembershipRepository::delete_role_assignment(self, tenant_id, identity_id)
            .await
            .map_err(|e| e.into_store_error())
    }

    async fn find_membership(
        &self,
        tenant_id: Uuid,
        identity_id: Uuid,
    ) -> Result<Option<Membership>, StoreError> {
        MembershipRepository::find_membership(self, tenant_id, identity_id)
            .await
            .map_err(|e| e.into_store_error())
    }
}
