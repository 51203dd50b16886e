//! Session tokens issued by the identity provider.

use serde::{Deserialize, Serialize};

/// Opaque token bundle, passed through to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp of token expiry.
    pub expires_at: i64,
}
