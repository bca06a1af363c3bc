// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Data-store error taxonomy.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the data-store contract.
///
/// The API layer maps these onto HTTP statuses: `DuplicateEmail` becomes a
/// 409 conflict, `NotFound` a 404, everything else a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with the given email already exists.
    #[error("email already registered: {email}")]
    DuplicateEmail {
        /// The conflicting email address.
        email: String,
    },

    /// The referenced resource does not exist.
    #[error("{resource} not found")]
    NotFound {
        /// Human-readable resource name, e.g. "ticket 42".
        resource: String,
    },

    /// The backing store failed. Not retried; propagates as a server error.
    #[error("store failure: {message}")]
    Backend {
        /// Failure description, for logging only.
        message: String,
    },
}

impl StoreError {
    /// Creates a duplicate-email conflict.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a backend failure.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::duplicate_email("a@b.c");
        assert_eq!(err.to_string(), "email already registered: a@b.c");

        let err = StoreError::not_found("ticket 42");
        assert_eq!(err.to_string(), "ticket 42 not found");
    }
}
