//! Read-only access to the seeded role catalog.

use crate::error::Result as DbErrorResult;
use crate::repositories::parse_uuid;

use hm_core::{Role, RoleCatalog, StoreError};

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code(&self, code: &str) -> DbErrorResult<Option<Role>> {
        let row = sqlx::query("SELECT id, code FROM hm_roles WHERE code = ?")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| {
            let id: String = r.try_get("id")?;
            Ok(Role {
                id: parse_uuid("role.id", &id)?,
                code: r.try_get("code")?,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl RoleCatalog for RoleRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Role>, StoreError> {
        RoleRepository::find_by_code(self, code)
            .await
            .map_err(|e| e.into_store_error())
    }
}
