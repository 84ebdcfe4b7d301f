use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{AuthResponse, LoginRequest, SignupRequestDto};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create an account and receive a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequestDto,
    responses(
        (status = 201, description = "Account created successfully", body = AuthResponse),
        (status = 400, description = "Bad request - email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequestDto>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = AuthService::signup(&state.db, dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a JWT token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}
