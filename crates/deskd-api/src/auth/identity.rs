// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Verified request identity.

use serde::{Deserialize, Serialize};

use deskd_core::{Role, UserId};

/// A verified (user id, role) pair.
///
/// Produced only by token verification and never persisted; it lives for the
/// duration of one request. The role comes from the token, not the account
/// record, so a role change after issuance is invisible until re-login (the
/// accepted staleness window is the token's 1-hour validity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account ID of the caller.
    pub user_id: UserId,
    /// Role embedded at token issuance.
    pub role: Role,
}

impl Identity {
    /// Creates an identity.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let a = Identity::new(1, Role::Support);
        let b = Identity::new(1, Role::Support);
        assert_eq!(a, b);
        assert_ne!(a, Identity::new(1, Role::Manager));
        assert_ne!(a, Identity::new(2, Role::Support));
    }
}
