// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Token issuance and verification.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

use super::{Claims, Identity};

/// Credential scheme prefix required on the Authorization header.
const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// JwtConfig
// =============================================================================

/// Token signing configuration.
///
/// The signing key is explicit, injected state. There is no ambient/global
/// secret lookup; tests construct a config with a fixture key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Symmetric secret for signing tokens.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Token validity window in seconds.
    pub expiration_secs: i64,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set by the operator
            expiration_secs: 3600, // 1 hour
            leeway_secs: 30,
        }
    }
}

impl JwtConfig {
    /// Creates a new configuration with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Validates the configuration. Missing secrets are a startup-time
    /// failure, not a per-request one.
    pub fn validate(&self) -> ApiResult<()> {
        if self.secret.is_empty() {
            return Err(ApiError::internal("JWT secret is not configured"));
        }
        if self.secret.len() < 32 {
            tracing::warn!("JWT secret is shorter than recommended (32 bytes)");
        }
        Ok(())
    }
}

// =============================================================================
// TokenService
// =============================================================================

/// Issues and verifies signed identity tokens.
///
/// Tokens are HS256-signed and carry the caller's user id and role plus
/// issued-at/expiry claims. The token is the sole source of truth for the
/// role at request time; verification does not consult the account store.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<JwtConfig>,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenService {
    /// Creates a token service from the given configuration.
    pub fn new(config: JwtConfig) -> ApiResult<Self> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;

        Ok(Self {
            config: Arc::new(config),
            encoding_key: Arc::new(encoding_key),
            decoding_key: Arc::new(decoding_key),
            validation: Arc::new(validation),
        })
    }

    /// Issues a token for a verified identity.
    pub fn issue(&self, identity: &Identity) -> ApiResult<String> {
        let claims = Claims::for_identity(identity, self.config.expiration_secs);
        self.sign(&claims)
    }

    /// Signs pre-built claims. Exposed for tests that need control over
    /// timestamps.
    pub fn sign(&self, claims: &Claims) -> ApiResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("failed to sign token: {}", e)))
    }

    /// Verifies a raw Authorization header value and returns the embedded
    /// identity.
    ///
    /// The value must carry the `Bearer ` scheme prefix; without it the
    /// credential is malformed. Signature and expiry failures are reported
    /// with a single indistinct message.
    pub fn verify_header(&self, header: &str) -> ApiResult<Identity> {
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| ApiError::unauthorized("malformed credential: expected Bearer scheme"))?;

        self.verify(token)
    }

    /// Verifies a bare token string and returns the embedded identity.
    pub fn verify(&self, token: &str) -> ApiResult<Identity> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token verification failed");
                ApiError::unauthorized("invalid or expired token")
            })?;

        data.claims
            .identity()
            .map_err(ApiError::unauthorized)
    }

    /// Returns the token validity window in seconds.
    pub fn expiration_secs(&self) -> i64 {
        self.config.expiration_secs
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expiration_secs", &self.config.expiration_secs)
            .field("leeway_secs", &self.config.leeway_secs)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use deskd_core::Role;

    fn test_service() -> TokenService {
        TokenService::new(JwtConfig::new(
            "test-secret-key-that-is-long-enough-for-testing",
        ))
        .unwrap()
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(TokenService::new(JwtConfig::default()).is_err());
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = test_service();
        let identity = Identity::new(7, Role::Manager);

        let token = service.issue(&identity).unwrap();
        let verified = service.verify_header(&format!("Bearer {}", token)).unwrap();

        assert_eq!(verified, identity);
    }

    #[test]
    fn test_missing_bearer_prefix() {
        let service = test_service();
        let token = service.issue(&Identity::new(1, Role::User)).unwrap();

        // Bare token, wrong scheme, wrong casing: all malformed.
        assert!(service.verify_header(&token).is_err());
        assert!(service.verify_header(&format!("Basic {}", token)).is_err());
        assert!(service.verify_header(&format!("bearer {}", token)).is_err());
    }

    #[test]
    fn test_expired_token() {
        let service = test_service();

        // Issued well past the validity window (beyond leeway).
        let claims = Claims::for_identity(&Identity::new(1, Role::User), -3600);
        let token = service.sign(&claims).unwrap();

        let err = service.verify(&token).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
    }

    #[test]
    fn test_wrong_secret() {
        let service_a = test_service();
        let service_b = TokenService::new(JwtConfig::new(
            "a-different-secret-also-long-enough-for-tests",
        ))
        .unwrap();

        let token = service_a.issue(&Identity::new(1, Role::Support)).unwrap();
        assert!(service_b.verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token() {
        let service = test_service();
        let mut token = service.issue(&Identity::new(1, Role::User)).unwrap();
        token.push('x');
        assert!(service.verify(&token).is_err());
    }
}
