// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The `serve` command.

use deskd_api::{ApiConfig, AppState, JwtConfig};

use crate::cli::{Cli, ServeArgs};
use crate::error::{BinError, BinResult};
use crate::shutdown::ShutdownCoordinator;

/// Starts the API server and runs until a shutdown signal arrives.
pub async fn serve(_cli: &Cli, args: ServeArgs) -> BinResult<()> {
    let secret = args
        .jwt_secret
        .ok_or_else(|| BinError::config("JWT secret is required (--jwt-secret or DESKD_JWT_SECRET)"))?;

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        cors_origins: args.cors_origins,
        request_timeout_secs: args.request_timeout,
        jwt: JwtConfig::new(secret),
        ..Default::default()
    };

    let state = AppState::in_memory(config)?;

    let coordinator = ShutdownCoordinator::new();
    let signal = coordinator.signal();

    let signal_listener = coordinator.clone();
    tokio::spawn(async move {
        signal_listener.wait_for_shutdown().await;
    });

    tracing::info!(version = deskd_api::VERSION, "starting deskd");

    deskd_api::run_with_shutdown(state, signal).await?;

    tracing::info!("deskd stopped");
    Ok(())
}
