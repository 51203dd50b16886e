use serde::Serialize;

/// Successful registration response (201)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub hotel_code: String,
}
