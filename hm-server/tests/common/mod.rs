#![allow(dead_code)]

//! Test infrastructure for hm-server API tests

use hm_auth::{AuthorizationResolver, ProvisioningSaga};
use hm_core::{
    Identity, IdentityError, IdentityProvider, NewIdentity, RandomSuffixSource, SessionDescriptor,
    SignInOutcome,
};
use hm_db::{MembershipRepository, RoleRepository, TenantRepository};
use hm_server::AppState;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// In-memory identity provider standing in for the external service.
#[derive(Default)]
pub struct StubIdentityProvider {
    /// (id, email, password)
    pub users: Mutex<Vec<(Uuid, String, String)>>,
    pub create_calls: AtomicUsize,
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome, IdentityError> {
        let users = self.users.lock().unwrap();
        let found = users
            .iter()
            .find(|(_, e, p)| e == email && p == password)
            .ok_or_else(IdentityError::invalid_credentials)?;

        Ok(SignInOutcome {
            identity: Identity {
                id: found.0,
                email: found.1.clone(),
                full_name: None,
            },
            session: SessionDescriptor {
                access_token: format!("access-{}", found.0),
                refresh_token: format!("refresh-{}", found.0),
                expires_at: 1704070800,
            },
        })
    }

    async fn create_identity(&self, new_identity: &NewIdentity) -> Result<Identity, IdentityError> {
        self.create_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        let id = Uuid::new_v4();
        self.users.lock().unwrap().push((
            id,
            new_identity.email.clone(),
            new_identity.password.clone(),
        ));

        Ok(Identity {
            id,
            email: new_identity.email.clone(),
            full_name: Some(new_identity.full_name.clone()),
        })
    }

    async fn delete_identity(&self, id: Uuid) -> Result<(), IdentityError> {
        self.users.lock().unwrap().retain(|(uid, _, _)| *uid != id);
        Ok(())
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    hm_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, wired against the stub identity provider
pub async fn create_test_app_state() -> (AppState, Arc<StubIdentityProvider>) {
    let pool = create_test_pool().await;

    let identity = Arc::new(StubIdentityProvider::default());
    let tenants = Arc::new(TenantRepository::new(pool.clone()));
    let memberships = Arc::new(MembershipRepository::new(pool.clone()));
    let roles = Arc::new(RoleRepository::new(pool.clone()));

    let saga = Arc::new(ProvisioningSaga::new(
        identity.clone(),
        tenants.clone(),
        memberships.clone(),
        roles,
        Arc::new(RandomSuffixSource),
        3,
    ));
    let resolver = Arc::new(AuthorizationResolver::new(
        identity.clone(),
        tenants,
        memberships,
    ));

    (
        AppState {
            pool,
            saga,
            resolver,
        },
        identity,
    )
}

/// POST a JSON body and return status + parsed response body
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// GET a path and return status + raw body
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}
