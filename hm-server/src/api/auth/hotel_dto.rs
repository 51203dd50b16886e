use hm_auth::TenantSummary;

use serde::Serialize;

/// Tenant identity for JSON serialization
#[derive(Debug, Serialize)]
pub struct HotelDto {
    pub id: String,
    pub name: String,
    pub code: String,
}

impl From<TenantSummary> for HotelDto {
    fn from(t: TenantSummary) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
            code: t.code,
        }
    }
}
