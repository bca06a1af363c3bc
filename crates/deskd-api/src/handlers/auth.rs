// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Login handler.

use axum::{extract::State, Json};
use serde::Deserialize;

use deskd_core::password::verify_password;

use crate::auth::Identity;
use crate::error::{ApiError, ApiResult};
use crate::response::{ApiResponse, AuthResponse};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// `POST /api/auth/login`
///
/// Exchanges credentials for a signed access token. The failure message never
/// distinguishes an unknown email from a wrong password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<ApiResponse<AuthResponse>> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::bad_request("email and password are required"));
    }

    let user = state
        .store
        .find_user_by_email(body.email.trim())
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid email or password"))?;

    if !verify_password(&body.password, &user.password_hash) {
        return Err(ApiError::unauthorized("invalid email or password"));
    }

    let identity = Identity::new(user.id, user.role);
    let token = state.token_service.issue(&identity)?;

    tracing::info!(user_id = user.id, role = %user.role, "login succeeded");

    Ok(ApiResponse::success(AuthResponse::new(
        token,
        state.token_service.expiration_secs(),
    )))
}
