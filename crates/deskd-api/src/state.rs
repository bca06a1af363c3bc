// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Shared application state.

use std::sync::Arc;

use deskd_core::{MemoryStore, TicketStore};

use crate::auth::TokenService;
use crate::config::ApiConfig;
use crate::error::ApiResult;

// =============================================================================
// AppState
// =============================================================================

/// State shared across all request handlers.
///
/// Cheap to clone: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ApiConfig>,
    /// Token issuance and verification.
    pub token_service: Arc<TokenService>,
    /// Backing data store.
    pub store: Arc<dyn TicketStore>,
}

impl AppState {
    /// Creates application state from a configuration and store.
    pub fn new(config: ApiConfig, store: Arc<dyn TicketStore>) -> ApiResult<Self> {
        config.validate()?;
        let token_service = TokenService::new(config.jwt.clone())?;

        Ok(Self {
            config: Arc::new(config),
            token_service: Arc::new(token_service),
            store,
        })
    }

    /// Creates application state backed by an empty in-memory store.
    pub fn in_memory(config: ApiConfig) -> ApiResult<Self> {
        Self::new(config, MemoryStore::shared())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("token_service", &self.token_service)
            .finish()
    }
}
