// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Domain records stored and served by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CommentId, Role, TicketId, TicketStatus, UserId};

// =============================================================================
// User
// =============================================================================

/// A user account.
///
/// The password hash is never serialized; API responses use [`UserProfile`].
#[derive(Debug, Clone)]
pub struct User {
    /// Account ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across accounts.
    pub email: String,
    /// Opaque password hash. Only ever compared via the password module.
    pub password_hash: String,
    /// Account role, set at creation and immutable.
    pub role: Role,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the serializable view of this account, with credentials
    /// stripped.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Credential-free view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email; uniqueness is enforced by the store.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Role for the new account.
    pub role: Role,
}

// =============================================================================
// Ticket
// =============================================================================

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket ID.
    pub id: TicketId,
    /// Short summary.
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Free-form priority label (e.g. "HIGH").
    pub priority: String,
    /// Lifecycle state.
    pub status: TicketStatus,
    /// Creator account; set once at creation.
    pub created_by: UserId,
    /// Assigned support account, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a ticket. New tickets always start `OPEN`.
#[derive(Debug, Clone)]
pub struct NewTicket {
    /// Short summary.
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Priority label.
    pub priority: String,
    /// Creator account.
    pub created_by: UserId,
    /// Optional initial assignee.
    pub assigned_to: Option<UserId>,
}

// =============================================================================
// Comment
// =============================================================================

/// A comment on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID.
    pub id: CommentId,
    /// Ticket this comment belongs to. Must reference an existing ticket
    /// at creation time.
    pub ticket_id: TicketId,
    /// Author account; set once at creation.
    pub user_id: UserId,
    /// Comment text.
    pub comment: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_strips_credentials() {
        let user = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "$argon2id$not-a-real-hash".to_string(),
            role: Role::Manager,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(user.profile()).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["role"], "MANAGER");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_ticket_serialization_omits_empty_assignee() {
        let ticket = Ticket {
            id: 7,
            title: "T".to_string(),
            description: "D".to_string(),
            priority: "HIGH".to_string(),
            status: TicketStatus::Open,
            created_by: 1,
            assigned_to: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["status"], "OPEN");
        assert!(json.get("assigned_to").is_none());
    }
}
