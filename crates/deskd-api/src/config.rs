// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API server configuration.

use serde::{Deserialize, Serialize};

use crate::auth::JwtConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// ApiConfig
// =============================================================================

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// CORS allowed origins. Empty means allow any origin.
    pub cors_origins: Vec<String>,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
    /// Token signing configuration.
    pub jwt: JwtConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            max_body_size: 1024 * 1024, // 1 MiB
            jwt: JwtConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Returns the socket address string to bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        if self.host.is_empty() {
            return Err(ApiError::internal("bind host must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ApiError::internal("request timeout must be positive"));
        }
        self.jwt.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_validate_requires_secret() {
        // Default config carries no signing secret.
        assert!(ApiConfig::default().validate().is_err());

        let mut config = ApiConfig::default();
        config.jwt = JwtConfig::new("a-secret-long-enough-for-validation-tests");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = ApiConfig::default();
        config.jwt = JwtConfig::new("a-secret-long-enough-for-validation-tests");
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
