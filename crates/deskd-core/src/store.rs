// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Data-store contract and in-memory implementation.
//!
//! The backend treats persistence as an external collaborator: handlers only
//! see the [`TicketStore`] trait. [`MemoryStore`] implements the contract for
//! tests and the default runtime.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::model::{Comment, NewTicket, NewUser, Ticket, User};
use crate::types::{CommentId, Role, TicketId, TicketStatus, UserId};

// =============================================================================
// TicketScope
// =============================================================================

/// Listing scope for ticket queries.
///
/// Produced by the authorization policy and consumed verbatim by the store:
/// the policy decides who may see what, the store only filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketScope {
    /// No restriction; every ticket matches.
    All,
    /// Only tickets assigned to the given account.
    AssignedTo(UserId),
    /// Only tickets created by the given account.
    CreatedBy(UserId),
}

impl TicketScope {
    /// Returns `true` if the ticket falls inside this scope.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            TicketScope::All => true,
            TicketScope::AssignedTo(id) => ticket.assigned_to == Some(*id),
            TicketScope::CreatedBy(id) => ticket.created_by == *id,
        }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Skip/take window for listing queries.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Number of records to skip.
    pub skip: usize,
    /// Maximum number of records to return.
    pub take: usize,
}

/// A page of tickets plus the total count across all pages.
#[derive(Debug, Clone)]
pub struct TicketPage {
    /// Tickets in this page, newest first.
    pub tickets: Vec<Ticket>,
    /// Total tickets matching the scope, across all pages.
    pub total: u64,
}

// =============================================================================
// TicketStore
// =============================================================================

/// Contract every backing store must satisfy.
///
/// Each call is an independent operation; the core imposes no cross-request
/// ordering or transactional coordination beyond what a single call needs.
/// Failures are not retried.
#[async_trait]
pub trait TicketStore: Send + Sync {
    // -------------------------------------------------------------------------
    // Users
    // -------------------------------------------------------------------------

    /// Looks up an account by email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Creates an account. Fails with [`StoreError::DuplicateEmail`] if the
    /// email is already registered.
    async fn create_user(&self, user: NewUser) -> StoreResult<User>;

    /// Lists every account with the given role, oldest first.
    async fn list_users_by_role(&self, role: Role) -> StoreResult<Vec<User>>;

    // -------------------------------------------------------------------------
    // Tickets
    // -------------------------------------------------------------------------

    /// Creates a ticket with status `OPEN`.
    async fn create_ticket(&self, ticket: NewTicket) -> StoreResult<Ticket>;

    /// Fetches a ticket by ID.
    async fn get_ticket(&self, id: TicketId) -> StoreResult<Option<Ticket>>;

    /// Lists tickets matching the scope, newest first, with skip/take
    /// pagination and the total scope count.
    async fn list_tickets(&self, scope: TicketScope, page: PageRequest)
        -> StoreResult<TicketPage>;

    /// Updates a ticket's status. Fails with [`StoreError::NotFound`] if the
    /// ticket does not exist.
    async fn set_ticket_status(&self, id: TicketId, status: TicketStatus) -> StoreResult<Ticket>;

    /// Deletes a ticket. Fails with [`StoreError::NotFound`] if absent.
    async fn delete_ticket(&self, id: TicketId) -> StoreResult<()>;

    // -------------------------------------------------------------------------
    // Comments
    // -------------------------------------------------------------------------

    /// Creates a comment. The caller is responsible for checking that the
    /// ticket exists first.
    async fn create_comment(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        comment: String,
    ) -> StoreResult<Comment>;

    /// Fetches a comment by ID.
    async fn get_comment(&self, id: CommentId) -> StoreResult<Option<Comment>>;

    /// Lists a ticket's comments, oldest first.
    async fn list_comments(&self, ticket_id: TicketId) -> StoreResult<Vec<Comment>>;

    /// Replaces a comment's text. Fails with [`StoreError::NotFound`] if the
    /// comment does not exist.
    async fn update_comment(&self, id: CommentId, comment: String) -> StoreResult<Comment>;

    /// Deletes a comment. Fails with [`StoreError::NotFound`] if absent.
    async fn delete_comment(&self, id: CommentId) -> StoreResult<()>;
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory [`TicketStore`] implementation.
///
/// Backs the default runtime and the test suite. `BTreeMap` keeps records in
/// insertion-id order so listing order is deterministic.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<BTreeMap<UserId, User>>,
    tickets: RwLock<BTreeMap<TicketId, Ticket>>,
    comments: RwLock<BTreeMap<CommentId, Comment>>,
    next_user_id: AtomicI64,
    next_ticket_id: AtomicI64,
    next_comment_id: AtomicI64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            tickets: RwLock::new(BTreeMap::new()),
            comments: RwLock::new(BTreeMap::new()),
            next_user_id: AtomicI64::new(1),
            next_ticket_id: AtomicI64::new(1),
            next_comment_id: AtomicI64::new(1),
        }
    }

    /// Creates an empty store behind an `Arc`, ready for [`TicketStore`] use.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate_email(user.email));
        }

        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        let record = User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        users.insert(id, record.clone());
        Ok(record)
    }

    async fn list_users_by_role(&self, role: Role) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.role == role).cloned().collect())
    }

    async fn create_ticket(&self, ticket: NewTicket) -> StoreResult<Ticket> {
        let mut tickets = self.tickets.write().await;

        let id = self.next_ticket_id.fetch_add(1, Ordering::SeqCst);
        let record = Ticket {
            id,
            title: ticket.title,
            description: ticket.description,
            priority: ticket.priority,
            status: TicketStatus::Open,
            created_by: ticket.created_by,
            assigned_to: ticket.assigned_to,
            created_at: Utc::now(),
        };
        tickets.insert(id, record.clone());
        Ok(record)
    }

    async fn get_ticket(&self, id: TicketId) -> StoreResult<Option<Ticket>> {
        let tickets = self.tickets.read().await;
        Ok(tickets.get(&id).cloned())
    }

    async fn list_tickets(
        &self,
        scope: TicketScope,
        page: PageRequest,
    ) -> StoreResult<TicketPage> {
        let tickets = self.tickets.read().await;

        // Newest first: reverse of id order.
        let matching: Vec<&Ticket> = tickets
            .values()
            .rev()
            .filter(|t| scope.matches(t))
            .collect();

        let total = matching.len() as u64;
        let tickets = matching
            .into_iter()
            .skip(page.skip)
            .take(page.take)
            .cloned()
            .collect();

        Ok(TicketPage { tickets, total })
    }

    async fn set_ticket_status(&self, id: TicketId, status: TicketStatus) -> StoreResult<Ticket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(format!("ticket {}", id)))?;
        ticket.status = status;
        Ok(ticket.clone())
    }

    async fn delete_ticket(&self, id: TicketId) -> StoreResult<()> {
        let mut tickets = self.tickets.write().await;
        tickets
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(format!("ticket {}", id)))
    }

    async fn create_comment(
        &self,
        ticket_id: TicketId,
        user_id: UserId,
        comment: String,
    ) -> StoreResult<Comment> {
        let mut comments = self.comments.write().await;

        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        let record = Comment {
            id,
            ticket_id,
            user_id,
            comment,
            created_at: Utc::now(),
        };
        comments.insert(id, record.clone());
        Ok(record)
    }

    async fn get_comment(&self, id: CommentId) -> StoreResult<Option<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments.get(&id).cloned())
    }

    async fn list_comments(&self, ticket_id: TicketId) -> StoreResult<Vec<Comment>> {
        let comments = self.comments.read().await;
        // BTreeMap iteration is id-ascending, which matches creation order.
        Ok(comments
            .values()
            .filter(|c| c.ticket_id == ticket_id)
            .cloned()
            .collect())
    }

    async fn update_comment(&self, id: CommentId, comment: String) -> StoreResult<Comment> {
        let mut comments = self.comments.write().await;
        let record = comments
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(format!("comment {}", id)))?;
        record.comment = comment;
        Ok(record.clone())
    }

    async fn delete_comment(&self, id: CommentId) -> StoreResult<()> {
        let mut comments = self.comments.write().await;
        comments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(format!("comment {}", id)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role,
        }
    }

    fn new_ticket(created_by: UserId, assigned_to: Option<UserId>) -> NewTicket {
        NewTicket {
            title: "T".to_string(),
            description: "D".to_string(),
            priority: "HIGH".to_string(),
            created_by,
            assigned_to,
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflict() {
        let store = MemoryStore::new();
        store
            .create_user(new_user("a@example.com", Role::Manager))
            .await
            .unwrap();

        let err = store
            .create_user(new_user("a@example.com", Role::Manager))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail { .. }));
    }

    #[tokio::test]
    async fn test_tickets_start_open() {
        let store = MemoryStore::new();
        let ticket = store.create_ticket(new_ticket(1, None)).await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Open);
    }

    #[tokio::test]
    async fn test_scope_filtering() {
        let store = MemoryStore::new();
        store.create_ticket(new_ticket(1, Some(2))).await.unwrap();
        store.create_ticket(new_ticket(3, Some(2))).await.unwrap();
        store.create_ticket(new_ticket(1, None)).await.unwrap();

        let page = PageRequest { skip: 0, take: 10 };

        let all = store.list_tickets(TicketScope::All, page).await.unwrap();
        assert_eq!(all.total, 3);

        let assigned = store
            .list_tickets(TicketScope::AssignedTo(2), page)
            .await
            .unwrap();
        assert_eq!(assigned.total, 2);
        assert!(assigned.tickets.iter().all(|t| t.assigned_to == Some(2)));

        let created = store
            .list_tickets(TicketScope::CreatedBy(1), page)
            .await
            .unwrap();
        assert_eq!(created.total, 2);
        assert!(created.tickets.iter().all(|t| t.created_by == 1));
    }

    #[tokio::test]
    async fn test_listing_is_newest_first_and_paginated() {
        let store = MemoryStore::new();
        for _ in 0..5 {
            store.create_ticket(new_ticket(1, None)).await.unwrap();
        }

        let page = store
            .list_tickets(TicketScope::All, PageRequest { skip: 1, take: 2 })
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        let ids: Vec<_> = page.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[tokio::test]
    async fn test_status_update_and_missing_ticket() {
        let store = MemoryStore::new();
        let ticket = store.create_ticket(new_ticket(1, None)).await.unwrap();

        let updated = store
            .set_ticket_status(ticket.id, TicketStatus::Closed)
            .await
            .unwrap();
        assert_eq!(updated.status, TicketStatus::Closed);

        let err = store
            .set_ticket_status(999, TicketStatus::Open)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_comments_ascending() {
        let store = MemoryStore::new();
        let ticket = store.create_ticket(new_ticket(1, None)).await.unwrap();

        store
            .create_comment(ticket.id, 1, "first".to_string())
            .await
            .unwrap();
        store
            .create_comment(ticket.id, 2, "second".to_string())
            .await
            .unwrap();
        // Unrelated ticket's comment must not leak in.
        let other = store.create_ticket(new_ticket(2, None)).await.unwrap();
        store
            .create_comment(other.id, 1, "elsewhere".to_string())
            .await
            .unwrap();

        let comments = store.list_comments(ticket.id).await.unwrap();
        let texts: Vec<_> = comments.iter().map(|c| c.comment.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_comment_update_and_delete() {
        let store = MemoryStore::new();
        let ticket = store.create_ticket(new_ticket(1, None)).await.unwrap();
        let comment = store
            .create_comment(ticket.id, 1, "draft".to_string())
            .await
            .unwrap();

        let updated = store
            .update_comment(comment.id, "final".to_string())
            .await
            .unwrap();
        assert_eq!(updated.comment, "final");

        store.delete_comment(comment.id).await.unwrap();
        assert!(store.get_comment(comment.id).await.unwrap().is_none());
        assert!(store.delete_comment(comment.id).await.is_err());
    }
}
