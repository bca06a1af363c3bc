// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use deskd_core::Role;

use super::Identity;

/// Claims embedded in an access token.
///
/// Carries the identity plus the standard issued-at/expiry timestamps. The
/// `role` claim deserializes into the closed [`Role`] enum, so a token whose
/// role string is unknown fails verification outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID, as a string per JWT convention.
    pub sub: String,
    /// Role embedded at issuance.
    pub role: Role,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an identity with the given validity window.
    pub fn for_identity(identity: &Identity, expires_in_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: identity.user_id.to_string(),
            role: identity.role,
            iat: now,
            exp: now + expires_in_secs,
        }
    }

    /// Recovers the identity these claims were issued for.
    ///
    /// Fails if the subject claim is not a well-formed user id.
    pub fn identity(&self) -> Result<Identity, String> {
        let user_id = self
            .sub
            .parse()
            .map_err(|_| format!("malformed subject claim: {:?}", self.sub))?;
        Ok(Identity::new(user_id, self.role))
    }

    /// Returns `true` if the expiry has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_round_trip() {
        let identity = Identity::new(42, Role::Support);
        let claims = Claims::for_identity(&identity, 3600);

        assert_eq!(claims.sub, "42");
        assert!(!claims.is_expired());
        assert_eq!(claims.identity().unwrap(), identity);
    }

    #[test]
    fn test_negative_window_is_expired() {
        let claims = Claims::for_identity(&Identity::new(1, Role::User), -60);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_malformed_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            role: Role::Manager,
            iat: 0,
            exp: i64::MAX,
        };
        assert!(claims.identity().is_err());
    }
}
