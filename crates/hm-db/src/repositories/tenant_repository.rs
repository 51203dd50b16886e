//! Tenant directory backed by SQLite.
//!
//! Slug and code carry UNIQUE constraints; `create` surfaces collisions as
//! [`DbError::UniqueViolation`] so the provisioning retry loop can draw a
//! fresh suffix instead of failing the registration outright.

use crate::error::Result as DbErrorResult;
use crate::repositories::{parse_json, parse_timestamp, parse_uuid};

use hm_core::{StoreError, Tenant, TenantDirectory};

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct TenantRepository {
    pool: SqlitePool,
}

impl TenantRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, tenant: &Tenant) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO hm_tenants (id, name, slug, code, timezone, settings, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(tenant.id.to_string())
        .bind(&tenant.name)
        .bind(&tenant.slug)
        .bind(&tenant.code)
        .bind(&tenant.timezone)
        .bind(tenant.settings.to_string())
        .bind(tenant.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_slug(&self, slug: &str) -> DbErrorResult<Option<Tenant>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, slug, code, timezone, settings, created_at
                FROM hm_tenants
                WHERE slug = ?
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_tenant_row(&r)).transpose()
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM hm_tenants WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_tenant_row(row: &SqliteRow) -> DbErrorResult<Tenant> {
    let id: String = row.try_get("id")?;
    let settings: String = row.try_get("settings")?;

    Ok(Tenant {
        id: parse_uuid("tenant.id", &id)?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        code: row.try_get("code")?,
        timezone: row.try_get("timezone")?,
        settings: parse_json("tenant.settings", &settings)?,
        created_at: parse_timestamp("tenant.created_at", row.try_get("created_at")?)?,
    })
}

#[async_trait]
impl TenantDirectory for TenantRepository {
    async fn create_tenant(&self, tenant: &Tenant) -> Result<(), StoreError> {
        self.create(tenant).await.map_err(|e| e.into_store_error())
    }

    async fn delete_tenant(&self, id: Uuid) -> Result<(), StoreError> {
        self.delete(id).await.map_err(|e| e.into_store_error())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, StoreError> {
        TenantRepository::find_by_slug(self, slug)
            .await
            .map_err(|e| e.into_store_error())
    }
}
