//! Handler for `/admin/login`.

use axum::extract::State;
use axum::Json;
use evreg_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_admin_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Bearer token for subsequent admin requests.
    pub token: String,
    /// Token lifetime in milliseconds.
    pub expires_in: i64,
}

/// POST /api/v1/admin/login
///
/// Authenticate as the single administrator. Both a wrong username and a
/// wrong password produce the same 401 so the response does not reveal
/// which half was wrong. No lockout, no rate limiting.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;

    if input.username != admin.username {
        return Err(invalid_credentials());
    }

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    let token = generate_admin_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %admin.username, "Admin login succeeded");

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_millis(),
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}
