// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP API for the deskd ticketing backend.
//!
//! Token-based authentication, role-scoped authorization and the REST
//! surface over the [`deskd_core`] store contract. The authorization design
//! is defense in depth: an edge gate screens the tickets API family before
//! routing, and every handler re-verifies the token on its own.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;
pub mod state;

pub use auth::{Claims, Identity, JwtConfig, TokenService};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use response::{ApiResponse, AuthResponse, ResponseMeta};
pub use server::{router, run, run_with_shutdown};
pub use state::AppState;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
