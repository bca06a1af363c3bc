// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # deskd Integration Tests
//!
//! Integration tests for the deskd support-ticketing backend.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities
//!   - `fixtures`: Seeded accounts, tickets and comments
//!   - `harness`: In-process HTTP harness over the router
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p deskd-tests
//!
//! # Run a specific test
//! cargo test -p deskd-tests test_auth_login_success
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;
