// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Request extractors.

use axum::{
    extract::{FromRequestParts, Query},
    http::{header, request::Parts},
};
use serde::Deserialize;

use deskd_core::PageRequest;

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Authenticated
// =============================================================================

/// Extractor that verifies the caller's bearer token.
///
/// Verification happens here, against the handler's own token service, even
/// when the edge gate already ran: each resource endpoint stands on its own
/// and never trusts upstream annotations for the authorization decision.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub Identity);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("authentication required"))?;

        let identity = state.token_service.verify_header(header_value)?;
        Ok(Authenticated(identity))
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Maximum page size a caller may request.
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct PaginationParams {
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

/// Page/pageSize query parameters with defaults.
///
/// Missing or unparseable values fall back to page 1 and 10 items per page;
/// pagination input is forgiving rather than strict. The page size is capped
/// so a caller cannot request an unbounded listing.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Page number, 1-indexed.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl Pagination {
    /// Returns the store-level skip/take window.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            skip: ((self.page - 1) as usize) * (self.page_size as usize),
            take: self.page_size as usize,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl FromRequestParts<AppState> for Pagination {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> =
            Query::from_request_parts(parts, state)
                .await
                .unwrap_or_else(|_| Query(PaginationParams {
                    page: None,
                    page_size: None,
                }));

        let defaults = Pagination::default();

        let page = params
            .page
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(defaults.page);

        let page_size = params
            .page_size
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|&size| size >= 1)
            .unwrap_or(defaults.page_size)
            .min(MAX_PAGE_SIZE);

        Ok(Pagination { page, page_size })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use crate::config::ApiConfig;
    use axum::http::Request;
    use deskd_core::{MemoryStore, Role};

    fn test_state() -> AppState {
        let mut config = ApiConfig::default();
        config.jwt = JwtConfig::new("test-secret-key-that-is-long-enough-for-testing");
        AppState::new(config, MemoryStore::shared()).unwrap()
    }

    fn parts(uri: &str, auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_authenticated_requires_header() {
        let state = test_state();
        let mut parts = parts("/api/tickets", None);

        let err = Authenticated::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_authenticated_round_trip() {
        let state = test_state();
        let token = state
            .token_service
            .issue(&Identity::new(4, Role::Support))
            .unwrap();
        let mut parts = parts("/api/tickets", Some(&format!("Bearer {}", token)));

        let Authenticated(identity) = Authenticated::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(identity, Identity::new(4, Role::Support));
    }

    #[tokio::test]
    async fn test_pagination_defaults() {
        let state = test_state();
        let mut parts = parts("/api/tickets", None);

        let pagination = Pagination::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.page_request().skip, 0);
    }

    #[tokio::test]
    async fn test_pagination_explicit_values() {
        let state = test_state();
        let mut parts = parts("/api/tickets?page=3&pageSize=25", None);

        let pagination = Pagination::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.page_size, 25);
        assert_eq!(pagination.page_request().skip, 50);
        assert_eq!(pagination.page_request().take, 25);
    }

    #[tokio::test]
    async fn test_pagination_garbage_falls_back() {
        let state = test_state();
        let mut parts = parts("/api/tickets?page=abc&pageSize=-5", None);

        let pagination = Pagination::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
    }

    #[tokio::test]
    async fn test_pagination_caps_page_size() {
        let state = test_state();
        let mut parts = parts("/api/tickets?pageSize=5000", None);

        let pagination = Pagination::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(pagination.page_size, MAX_PAGE_SIZE);
    }
}
