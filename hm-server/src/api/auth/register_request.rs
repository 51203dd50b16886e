use serde::Deserialize;

/// POST /auth/register body. Missing fields deserialize to empty strings so
/// they surface as field validation errors rather than body rejections.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub hotel_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}
