use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::extractors::json::AppJson;
use crate::models::auth::{LoginRequest, LoginResponse, MeResponse, validate_login_request};
use crate::state::AppState;
use crate::utils::jwt;

/// Handle admin login.
///
/// There is a single administrator account; its credentials come from
/// configuration (or the environment).
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Log in as the administrator",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Wrong credentials (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    validate_login_request(&payload)?;

    let auth = &state.config.auth;
    if payload.username != auth.admin_username || payload.password != auth.admin_password {
        return Err(AppError::InvalidCredentials);
    }

    let token = jwt::sign(&payload.username, &auth.jwt_secret)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        username: payload.username,
    }))
}

/// Return the current authenticated admin.
#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "me",
    summary = "Current administrator",
    responses(
        (status = 200, description = "Authenticated admin", body = MeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(admin), fields(username = %admin.username))]
pub async fn me(admin: AdminUser) -> Json<MeResponse> {
    Json(MeResponse {
        username: admin.username,
    })
}
