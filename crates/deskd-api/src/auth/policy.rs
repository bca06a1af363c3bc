// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Authorization policy.
//!
//! Pure decision functions mapping (role, ownership, action) to allow/deny.
//! No side effects and no store access: callers fetch ownership facts first
//! and hand them in. Every function matches exhaustively on [`Role`], so a
//! new role forces every decision point to be revisited at compile time.

use deskd_core::{Role, TicketScope, UserId};

use super::Identity;

/// Returns the listing scope for the caller.
///
/// Managers see every ticket, support staff see tickets assigned to them,
/// users see tickets they created. The scope becomes the store-level filter
/// for the paginated listing query.
pub fn list_scope(identity: &Identity) -> TicketScope {
    match identity.role {
        Role::Manager => TicketScope::All,
        Role::Support => TicketScope::AssignedTo(identity.user_id),
        Role::User => TicketScope::CreatedBy(identity.user_id),
    }
}

/// Only managers may create tickets.
pub fn can_create_ticket(role: Role) -> bool {
    match role {
        Role::Manager => true,
        Role::Support | Role::User => false,
    }
}

/// Managers and support staff may change a ticket's status.
///
/// The status value itself is validated as input before this check matters;
/// an unknown status is malformed input (400), not an authorization issue.
pub fn can_set_ticket_status(role: Role) -> bool {
    match role {
        Role::Manager | Role::Support => true,
        Role::User => false,
    }
}

/// Managers and support staff may delete tickets.
///
/// The predecessor system left deletion open to any authenticated caller;
/// that was judged an oversight and tightened here.
pub fn can_delete_ticket(role: Role) -> bool {
    match role {
        Role::Manager | Role::Support => true,
        Role::User => false,
    }
}

/// Managers, support staff, and the comment's author may edit or delete a
/// comment.
pub fn can_mutate_comment(role: Role, author_id: UserId, caller_id: UserId) -> bool {
    match role {
        Role::Manager | Role::Support => true,
        Role::User => caller_id == author_id,
    }
}

// =============================================================================
// Tests
// =============================================================================
