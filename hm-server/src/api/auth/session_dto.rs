use hm_core::SessionDescriptor;

use serde::Serialize;

/// Session tokens, passed through from the identity provider verbatim
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

impl From<SessionDescriptor> for SessionDto {
    fn from(s: SessionDescriptor) -> Self {
        Self {
            access_token: s.access_token,
            refresh_token: s.refresh_token,
            expires_at: s.expires_at,
        }
    }
}
