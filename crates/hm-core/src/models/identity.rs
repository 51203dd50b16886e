//! Identity records owned by the external identity provider.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A verified identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

/// Payload for provisioning a new identity. The account is created
/// pre-verified; no confirmation round trip is involved.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    pub password: String,
    pub full_name: String,
}
