//! Shared application state.

use hm_auth::{AuthorizationResolver, ProvisioningSaga};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Built once at startup. The store clients and the identity client are
/// constructed a single time in `main` and handed to the orchestrators
/// explicitly; request handlers only ever see this state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub saga: Arc<ProvisioningSaga>,
    pub resolver: Arc<AuthorizationResolver>,
}
