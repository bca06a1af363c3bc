// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// ApiResponse
// =============================================================================

/// Generic API response wrapper.
///
/// Provides consistent response structure across all endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful.
    pub success: bool,
    /// Response data (if successful).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response with data.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            meta: None,
        }
    }

    /// Adds metadata to the response.
    pub fn with_meta(mut self, meta: ResponseMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

// =============================================================================
// Response Meta
// =============================================================================

/// Pagination metadata attached to listing responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Total number of items across all pages.
    pub total: u64,
    /// Page number (1-indexed).
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total pages.
    pub total_pages: u32,
}

impl ResponseMeta {
    /// Creates pagination metadata.
    pub fn pagination(total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = ((total as f64) / (page_size as f64)).ceil() as u32;
        Self {
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

// =============================================================================
// AuthResponse
// =============================================================================

/// Login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Access token.
    pub token: String,
    /// Token type (always "Bearer").
    pub token_type: String,
    /// Validity window in seconds.
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a new auth response.
    pub fn new(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
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
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert!(response.success);
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_pagination_meta() {
        let meta = ResponseMeta::pagination(21, 2, 10);
        assert_eq!(meta.total, 21);
        assert_eq!(meta.total_pages, 3);

        let empty = ResponseMeta::pagination(0, 1, 10);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_auth_response() {
        let response = AuthResponse::new("tok".to_string(), 3600);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
    }
}
