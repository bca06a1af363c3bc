// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Comment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use deskd_core::{Comment, CommentId, TicketId};

use crate::auth::policy;
use crate::error::{ApiError, ApiResult};
use crate::extractors::Authenticated;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Comment creation/edit request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    /// Comment text.
    pub comment: Option<String>,
}

impl CommentRequest {
    fn text(self) -> ApiResult<String> {
        match self.comment {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ApiError::bad_request("comment text is required")),
        }
    }
}

/// `GET /api/tickets/{id}/comments`
///
/// Lists a ticket's comments, oldest first. Any authenticated caller may
/// read. Existence is only enforced on writes; a ticket with no comments
/// and a missing ticket both read as an empty list.
pub async fn list_comments(
    State(state): State<AppState>,
    Authenticated(_identity): Authenticated,
    Path(ticket_id): Path<TicketId>,
) -> ApiResult<ApiResponse<Vec<Comment>>> {
    let comments = state.store.list_comments(ticket_id).await?;
    Ok(ApiResponse::success(comments))
}

/// `POST /api/tickets/{id}/comments`
///
/// Adds a comment to an existing ticket. Any authenticated caller may
/// comment; authorship is recorded from the token, not the body.
pub async fn create_comment(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(ticket_id): Path<TicketId>,
    Json(body): Json<CommentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let text = body.text()?;
    ensure_ticket_exists(&state, ticket_id).await?;

    let comment = state
        .store
        .create_comment(ticket_id, identity.user_id, text)
        .await?;

    tracing::info!(
        comment_id = comment.id,
        ticket_id = ticket_id,
        user_id = identity.user_id,
        "comment created"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(comment))))
}

/// `PATCH /api/comments/{id}`
///
/// Edits a comment. Staff may edit any comment; a user only their own.
pub async fn update_comment(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<CommentId>,
    Json(body): Json<CommentRequest>,
) -> ApiResult<ApiResponse<Comment>> {
    let text = body.text()?;

    let existing = state
        .store
        .get_comment(id)
        .await?
        .ok_or_else(|| ApiError::not_found("comment"))?;

    if !policy::can_mutate_comment(identity.role, existing.user_id, identity.user_id) {
        return Err(ApiError::forbidden("not the author of this comment"));
    }

    let comment = state.store.update_comment(id, text).await?;
    Ok(ApiResponse::success(comment))
}

/// `DELETE /api/comments/{id}`
///
/// Deletes a comment under the same rule as editing.
pub async fn delete_comment(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<CommentId>,
) -> ApiResult<ApiResponse<serde_json::Value>> {
    let existing = state
        .store
        .get_comment(id)
        .await?
        .ok_or_else(|| ApiError::not_found("comment"))?;

    if !policy::can_mutate_comment(identity.role, existing.user_id, identity.user_id) {
        return Err(ApiError::forbidden("not the author of this comment"));
    }

    state.store.delete_comment(id).await?;

    tracing::info!(comment_id = id, deleted_by = identity.user_id, "comment deleted");

    Ok(ApiResponse::success(serde_json::json!({ "deleted": id })))
}

async fn ensure_ticket_exists(state: &AppState, ticket_id: TicketId) -> ApiResult<()> {
    state
        .store
        .get_ticket(ticket_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("ticket"))
}
