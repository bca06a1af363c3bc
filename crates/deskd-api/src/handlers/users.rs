// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! User account handlers.
//!
//! Both endpoints are deliberately unauthenticated: listing exposes only
//! credential-free manager profiles, and registration is the bootstrap path
//! for the first manager account.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use deskd_core::password::hash_password;
use deskd_core::{NewUser, Role, UserProfile};

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// `GET /api/users`
///
/// Lists manager accounts. Password material never leaves the store.
pub async fn list_managers(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<UserProfile>>> {
    let managers = state.store.list_users_by_role(Role::Manager).await?;
    let profiles = managers.iter().map(|user| user.profile()).collect();
    Ok(ApiResponse::success(profiles))
}

/// `POST /api/users`
///
/// Registers a manager account. A duplicate email is a conflict.
pub async fn register_manager(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserProfile>>)> {
    let name = body.name.trim();
    let email = body.email.trim();

    if name.is_empty() || email.is_empty() || body.password.is_empty() {
        return Err(ApiError::bad_request(
            "name, email and password are required",
        ));
    }

    let password_hash = hash_password(&body.password)?;

    let user = state
        .store
        .create_user(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::Manager,
        })
        .await?;

    tracing::info!(user_id = user.id, "manager account registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(user.profile())),
    ))
}
