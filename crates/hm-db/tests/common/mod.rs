#![allow(dead_code)]

//! Shared test infrastructure for repository tests.

use hm_core::{Tenant, TenantIdentifiers};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    hm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A tenant with pinned identifiers for lookups in assertions
pub fn sample_tenant(name: &str, suffix: &str) -> Tenant {
    let base = hm_core::slug::slugify(name);
    let slug = format!("{}-{}", base, suffix);
    let code = slug.to_uppercase();

    Tenant::new(name.to_string(), TenantIdentifiers { slug, code })
}
