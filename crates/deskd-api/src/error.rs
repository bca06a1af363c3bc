// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API error types and HTTP status mapping.
//!
//! One error kind per status code in the contract: 400 malformed input,
//! 401 missing/invalid credential, 403 policy denial, 404 missing resource,
//! 409 duplicate email, 500 unexpected failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use deskd_core::StoreError;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// ApiError
// =============================================================================

/// API error type, convertible straight into an HTTP response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input (400).
    #[error("bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Missing, malformed, invalid, or expired credential (401).
    #[error("unauthorized: {message}")]
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Authenticated but denied by the authorization policy (403).
    #[error("forbidden: {message}")]
    Forbidden {
        /// Error message.
        message: String,
    },

    /// Resource not found (404).
    #[error("{resource} not found")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Duplicate email (409).
    #[error("conflict: {message}")]
    Conflict {
        /// Error message.
        message: String,
    },

    /// Unexpected failure (500). The message is logged, never echoed.
    #[error("internal error: {message}")]
    Internal {
        /// Failure description, for operator logs only.
        message: String,
    },
}

impl ApiError {
    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Forbidden { .. } => "FORBIDDEN",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Internal failures get a generic message; the underlying reason stays
    /// in the server log.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest { message } => message.clone(),
            ApiError::Unauthorized { message } => message.clone(),
            ApiError::Forbidden { message } => message.clone(),
            ApiError::NotFound { resource } => format!("{} not found", resource),
            ApiError::Conflict { message } => message.clone(),
            ApiError::Internal { .. } => "internal server error".to_string(),
        }
    }

    /// Returns `true` if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Internal { .. })
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        if self.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = error_code,
                status = %status,
                "request failed"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = error_code,
                status = %status,
                "request rejected"
            );
        }

        let body = ErrorResponseBody {
            error: ErrorDetails {
                code: error_code.to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Error Response Body
// =============================================================================

/// Error response body structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseBody {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { email } => {
                ApiError::conflict(format!("email already registered: {}", email))
            }
            StoreError::NotFound { resource } => ApiError::not_found(resource),
            StoreError::Backend { message } => ApiError::internal(message),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_not_echoed() {
        let err = ApiError::internal("connection refused to db.internal:5432");
        assert_eq!(err.user_message(), "internal server error");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::duplicate_email("a@b.c").into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let err: ApiError = StoreError::not_found("ticket 7").into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = StoreError::backend("disk full").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
