// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Authentication and authorization module.
//!
//! This module provides:
//! - Token issuance and verification
//! - The verified request identity
//! - The pure authorization policy

mod claims;
mod identity;
mod jwt;
pub mod policy;

pub use claims::Claims;
pub use identity::Identity;
pub use jwt::{JwtConfig, TokenService};
