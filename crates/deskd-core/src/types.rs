// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Core identifier and enumeration types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User account identifier.
pub type UserId = i64;

/// Ticket identifier.
pub type TicketId = i64;

/// Comment identifier.
pub type CommentId = i64;

// =============================================================================
// Role
// =============================================================================

/// Account roles.
///
/// The role set is closed: every authorization decision matches exhaustively
/// on this enum, so adding a role is a compile-time-checked decision point.
/// A role is assigned at account creation and is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full access: sees all tickets, creates tickets, manages status.
    Manager,
    /// Works assigned tickets and manages their status.
    Support,
    /// End user: sees and comments on their own tickets.
    User,
}

impl Role {
    /// Returns the role name in its wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "MANAGER",
            Role::Support => "SUPPORT",
            Role::User => "USER",
        }
    }

    /// Parses a role from its wire format.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "MANAGER" => Some(Role::Manager),
            "SUPPORT" => Some(Role::Support),
            "USER" => Some(Role::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// TicketStatus
// =============================================================================

/// Ticket lifecycle states.
///
/// A ticket starts as `Open`. The status-set operation may move a ticket to
/// any state from any state; no forward/backward ordering is enforced once
/// authorization passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Newly created, not yet picked up.
    Open,
    /// Being worked on.
    InProgress,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Done.
    Closed,
}

impl TicketStatus {
    /// Returns the status in its wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }

    /// Parses a status from its wire format.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(TicketStatus::Open),
            "IN_PROGRESS" => Some(TicketStatus::InProgress),
            "RESOLVED" => Some(TicketStatus::Resolved),
            "CLOSED" => Some(TicketStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Manager, Role::Support, Role::User] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("SUPERADMIN"), None);
        assert_eq!(Role::parse("manager"), None);
    }

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&Role::Support).unwrap();
        assert_eq!(json, "\"SUPPORT\"");

        let role: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(role, Role::Manager);

        // Unknown roles are rejected at deserialization, never constructed.
        assert!(serde_json::from_str::<Role>("\"ROOT\"").is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ] {
            assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TicketStatus::parse("REOPENED"), None);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }
}
