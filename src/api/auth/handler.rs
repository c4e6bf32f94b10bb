//! Admin Login Handler
//!
//! Compares the supplied password against the configured admin secret and,
//! on match, hands back the single static bearer token. There is no
//! session, expiry, or rotation.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::{AppError, AppJson, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<ServerState>,
    AppJson(req): AppJson<AdminLoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if req.password != state.config.admin_password {
        tracing::warn!(target: "security", "admin login failed - invalid credentials");
        return Err(AppError::unauthorized());
    }

    Ok(Json(AdminLoginResponse {
        token: state.config.admin_token.clone(),
    }))
}
