// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Request handlers.

pub mod auth;
pub mod comments;
pub mod health;
pub mod tickets;
pub mod users;
