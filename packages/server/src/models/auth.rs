use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for admin login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Bearer token for subsequent admin requests.
    pub token: String,
    pub username: String,
}

/// Current authenticated admin.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    pub username: String,
}

pub fn validate_login_request(req: &LoginRequest) -> Result<(), AppError> {
    if req.username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }
    Ok(())
}
