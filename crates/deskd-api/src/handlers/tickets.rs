// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Ticket handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use deskd_core::{NewTicket, Ticket, TicketId, TicketStatus, UserId};

use crate::auth::policy;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{Authenticated, Pagination};
use crate::response::{ApiResponse, ResponseMeta};
use crate::state::AppState;

// =============================================================================
// Request bodies
// =============================================================================

/// Ticket creation request body.
///
/// Fields are optional at the wire level so that the role check can run
/// before input validation: a non-manager is denied regardless of what the
/// payload looks like.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTicketRequest {
    /// Short summary.
    pub title: Option<String>,
    /// Full problem description.
    pub description: Option<String>,
    /// Priority label.
    pub priority: Option<String>,
    /// Optional initial assignee.
    #[serde(rename = "assignedTo")]
    pub assigned_to: Option<UserId>,
}

/// Status change request body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetStatusRequest {
    /// Requested lifecycle state, in wire form (e.g. `IN_PROGRESS`).
    pub status: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/tickets`
///
/// Lists tickets visible to the caller, newest first, paginated. The policy
/// scope narrows the query per role; the handler never widens it.
pub async fn list_tickets(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    pagination: Pagination,
) -> ApiResult<ApiResponse<Vec<Ticket>>> {
    let scope = policy::list_scope(&identity);
    let page = state
        .store
        .list_tickets(scope, pagination.page_request())
        .await?;

    let meta = ResponseMeta::pagination(page.total, pagination.page, pagination.page_size);
    Ok(ApiResponse::success(page.tickets).with_meta(meta))
}

/// `POST /api/tickets`
///
/// Creates a ticket. Manager only; new tickets always start `OPEN`.
pub async fn create_ticket(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Json(body): Json<CreateTicketRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Ticket>>)> {
    if !policy::can_create_ticket(identity.role) {
        return Err(ApiError::forbidden("only managers may create tickets"));
    }

    let title = non_empty(body.title, "title")?;
    let description = non_empty(body.description, "description")?;
    let priority = non_empty(body.priority, "priority")?;

    let ticket = state
        .store
        .create_ticket(NewTicket {
            title,
            description,
            priority,
            created_by: identity.user_id,
            assigned_to: body.assigned_to,
        })
        .await?;

    tracing::info!(ticket_id = ticket.id, created_by = identity.user_id, "ticket created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(ticket))))
}

/// `DELETE /api/tickets/{id}`
///
/// Deletes a ticket. Managers and support staff only.
pub async fn delete_ticket(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<TicketId>,
) -> ApiResult<ApiResponse<serde_json::Value>> {
    if !policy::can_delete_ticket(identity.role) {
        return Err(ApiError::forbidden("insufficient role to delete tickets"));
    }

    state.store.delete_ticket(id).await?;

    tracing::info!(ticket_id = id, deleted_by = identity.user_id, "ticket deleted");

    Ok(ApiResponse::success(serde_json::json!({ "deleted": id })))
}

/// `PATCH /api/tickets/{id}/status`
///
/// Changes a ticket's status. Check order is fixed: role denial first, then
/// status validation, then ticket existence.
pub async fn set_ticket_status(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<TicketId>,
    Json(body): Json<SetStatusRequest>,
) -> ApiResult<ApiResponse<Ticket>> {
    if !policy::can_set_ticket_status(identity.role) {
        return Err(ApiError::forbidden(
            "insufficient role to change ticket status",
        ));
    }

    let status = body
        .status
        .as_deref()
        .and_then(TicketStatus::parse)
        .ok_or_else(|| ApiError::bad_request("invalid or missing status"))?;

    let ticket = state.store.set_ticket_status(id, status).await?;

    tracing::info!(
        ticket_id = id,
        status = %status,
        changed_by = identity.user_id,
        "ticket status changed"
    );

    Ok(ApiResponse::success(ticket))
}

fn non_empty(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::bad_request(format!("{} is required", field))),
    }
}
