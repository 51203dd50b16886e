use crate::api::auth::hotel_dto::HotelDto;
use crate::api::auth::session_dto::SessionDto;

use serde::Serialize;

/// Successful login response (200)
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub hotel: HotelDto,
    pub role: String,
    pub session: SessionDto,
}
