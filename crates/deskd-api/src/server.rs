// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP server assembly.

use std::future::Future;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::handlers;
use crate::middleware::GateLayer;
use crate::state::AppState;

// =============================================================================
// Router
// =============================================================================

/// Builds the application router.
///
/// The edge gate sits closest to the routes so the trace, CORS and timeout
/// layers still apply to requests it rejects.
pub fn router(state: AppState) -> Router {
    let gate = GateLayer::new(state.token_service.clone());
    let cors = cors_layer(&state.config);
    let timeout = TimeoutLayer::new(Duration::from_secs(state.config.request_timeout_secs));
    let body_limit = DefaultBodyLimit::max(state.config.max_body_size);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/auth/login", post(handlers::auth::login))
        .route(
            "/api/users",
            get(handlers::users::list_managers).post(handlers::users::register_manager),
        )
        .route(
            "/api/tickets",
            get(handlers::tickets::list_tickets).post(handlers::tickets::create_ticket),
        )
        .route("/api/tickets/{id}", delete(handlers::tickets::delete_ticket))
        .route(
            "/api/tickets/{id}/status",
            patch(handlers::tickets::set_ticket_status),
        )
        .route(
            "/api/tickets/{id}/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route(
            "/api/comments/{id}",
            patch(handlers::comments::update_comment).delete(handlers::comments::delete_comment),
        )
        .layer(gate)
        .layer(timeout)
        .layer(cors)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

// =============================================================================
// Server
// =============================================================================

/// Runs the API server until the process is stopped.
pub async fn run(state: AppState) -> ApiResult<()> {
    run_with_shutdown(state, std::future::pending()).await
}

/// Runs the API server until the shutdown future resolves.
pub async fn run_with_shutdown(
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> ApiResult<()> {
    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::internal(format!("failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ApiError::internal(format!("server error: {}", e)))?;

    tracing::info!("API server stopped");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
