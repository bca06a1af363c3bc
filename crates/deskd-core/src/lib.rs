// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # deskd-core
//!
//! Domain model and data-store contract for the deskd support-ticketing
//! backend.
//!
//! This crate provides the types shared across deskd components:
//!
//! - **Types**: `Role`, `TicketStatus`, and identifier aliases
//! - **Model**: `User`, `Ticket`, and `Comment` records
//! - **Store**: the `TicketStore` contract, `TicketScope` filters, and the
//!   in-memory implementation
//! - **Password**: opaque hash/verify capability
//! - **Error**: store error taxonomy
//!
//! ## Example
//!
//! ```rust,ignore
//! use deskd_core::{MemoryStore, NewTicket, TicketScope, TicketStore};
//!
//! let store = MemoryStore::shared();
//! let ticket = store.create_ticket(NewTicket {
//!     title: "Printer on fire".into(),
//!     description: "Again.".into(),
//!     priority: "HIGH".into(),
//!     created_by: 1,
//!     assigned_to: None,
//! }).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod model;
pub mod password;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use model::{Comment, NewTicket, NewUser, Ticket, User, UserProfile};
pub use store::{MemoryStore, PageRequest, TicketPage, TicketScope, TicketStore};
pub use types::{CommentId, Role, TicketId, TicketStatus, UserId};
