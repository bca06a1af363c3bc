// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Password hashing.
//!
//! Thin wrapper around Argon2id. Callers treat this as an opaque one-way
//! hash/verify capability; nothing outside this module inspects hash
//! contents.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{StoreError, StoreResult};

/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::backend(format!("password hashing failed: {}", e)))
}

/// Verifies a plaintext password against a stored hash.
///
/// Returns `false` both for a mismatched password and for an unparseable
/// hash; callers only learn pass/fail.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
