pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    auth::{
        auth::{login, register},
        hotel_dto::HotelDto,
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        session_dto::SessionDto,
    },
    error::ApiError,
    error::Result as ApiResult,
};

pub use app_state::AppState;
pub use routes::build_router;
