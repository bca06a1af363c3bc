// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Seeded accounts, tickets and comments for reproducible tests.

use std::sync::Arc;

use deskd_api::{ApiConfig, AppState, Identity, JwtConfig};
use deskd_core::password::hash_password;
use deskd_core::{
    MemoryStore, NewTicket, NewUser, Role, TicketId, TicketStore, UserId,
};

/// Signing secret shared by every test service.
pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-must-be-at-least-32-chars";

/// Password for every seeded account.
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// IDs of the seeded records.
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    /// The manager account.
    pub manager: UserId,
    /// The support account.
    pub support: UserId,
    /// The plain user account.
    pub user: UserId,
    /// Ticket created by the manager, assigned to the support account.
    pub assigned_ticket: TicketId,
    /// Ticket created by the manager, unassigned.
    pub open_ticket: TicketId,
    /// Ticket created by the plain user.
    pub user_ticket: TicketId,
}

impl Seed {
    /// Returns the identity for the seeded account with the given role.
    pub fn identity(&self, role: Role) -> Identity {
        match role {
            Role::Manager => Identity::new(self.manager, Role::Manager),
            Role::Support => Identity::new(self.support, Role::Support),
            Role::User => Identity::new(self.user, Role::User),
        }
    }
}

/// Test API configuration with the fixture signing secret.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        jwt: JwtConfig::new(TEST_SECRET),
        ..Default::default()
    }
}

/// Creates application state over a store seeded with three accounts,
/// three tickets and two comments.
///
/// Layout:
/// - manager, support and user accounts, all with [`TEST_PASSWORD`]
/// - a ticket by the manager assigned to the support account, carrying two
///   comments (manager's first, user's second)
/// - an unassigned ticket by the manager
/// - a ticket created by the plain user
pub async fn seeded_state() -> (AppState, Seed) {
    let store = MemoryStore::shared();
    let seed = seed_store(store.clone()).await;

    let state = AppState::new(test_config(), store).expect("valid test state");
    (state, seed)
}

async fn seed_store(store: Arc<MemoryStore>) -> Seed {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashable password");

    let manager = store
        .create_user(NewUser {
            name: "Mia Manager".to_string(),
            email: "manager@example.com".to_string(),
            password_hash: password_hash.clone(),
            role: Role::Manager,
        })
        .await
        .expect("seed manager");

    let support = store
        .create_user(NewUser {
            name: "Sam Support".to_string(),
            email: "support@example.com".to_string(),
            password_hash: password_hash.clone(),
            role: Role::Support,
        })
        .await
        .expect("seed support");

    let user = store
        .create_user(NewUser {
            name: "Uma User".to_string(),
            email: "user@example.com".to_string(),
            password_hash,
            role: Role::User,
        })
        .await
        .expect("seed user");

    let assigned_ticket = store
        .create_ticket(NewTicket {
            title: "Printer on fire".to_string(),
            description: "The office printer is emitting smoke".to_string(),
            priority: "HIGH".to_string(),
            created_by: manager.id,
            assigned_to: Some(support.id),
        })
        .await
        .expect("seed assigned ticket");

    let open_ticket = store
        .create_ticket(NewTicket {
            title: "VPN flaky".to_string(),
            description: "Connection drops every ten minutes".to_string(),
            priority: "MEDIUM".to_string(),
            created_by: manager.id,
            assigned_to: None,
        })
        .await
        .expect("seed open ticket");

    let user_ticket = store
        .create_ticket(NewTicket {
            title: "Password reset".to_string(),
            description: "Locked out of the portal".to_string(),
            priority: "LOW".to_string(),
            created_by: user.id,
            assigned_to: None,
        })
        .await
        .expect("seed user ticket");

    store
        .create_comment(
            assigned_ticket.id,
            manager.id,
            "Escalating to facilities".to_string(),
        )
        .await
        .expect("seed first comment");

    store
        .create_comment(
            assigned_ticket.id,
            user.id,
            "It has stopped smoking now".to_string(),
        )
        .await
        .expect("seed second comment");

    Seed {
        manager: manager.id,
        support: support.id,
        user: user.id,
        assigned_ticket: assigned_ticket.id,
        open_ticket: open_ticket.id,
        user_ticket: user_ticket.id,
    }
}
