//! Authentication API handlers
//!
//! Registration drives the provisioning saga; login drives the
//! authorization resolver. Handlers translate between the wire DTOs and
//! the flow-level types and map every flow error onto a status code.

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::register_response::RegisterResponse;
use crate::api::error::Result as ApiResult;
use crate::app_state::AppState;

use axum::{Json, extract::State, http::StatusCode};

/// POST /auth/register
///
/// Provision a tenant with one administrator. Returns the hotel code the
/// administrator will log in with; no session is issued here.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let request = hm_auth::RegistrationRequest {
        full_name: body.full_name,
        hotel_name: body.hotel_name,
        email: body.email,
        password: body.password,
    };

    let outcome = state.saga.provision(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            hotel_code: outcome.hotel_code,
        }),
    ))
}

/// POST /auth/login
///
/// Resolve credentials + hotel code into a tenant-scoped session.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let request = hm_auth::LoginRequest {
        email: body.email,
        password: body.password,
        hotel_code: body.hotel_code,
    };

    let outcome = state.resolver.authorize(&request).await?;

    Ok(Json(LoginResponse {
        success: true,
        hotel: outcome.hotel.into(),
        role: outcome.role,
        session: outcome.session.into(),
    }))
}
