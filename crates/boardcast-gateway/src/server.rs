// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes and shared state for the webhook endpoint.

use axum::{
    Router,
    routing::{get, post},
};
use boardcast_core::BoardcastError;
use boardcast_devops::DevOpsClient;
use boardcast_slack::SlackClient;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Work-item reads.
    pub devops: DevOpsClient,
    /// Unfurl posts.
    pub slack: SlackClient,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

impl GatewayState {
    pub fn new(devops: DevOpsClient, slack: SlackClient) -> Self {
        Self {
            devops,
            slack,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Gateway server configuration (mirrors ServerConfig from boardcast-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router.
///
/// Routes:
/// - POST /slack/events — the Slack Events API endpoint
/// - GET /health — unauthenticated status
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/slack/events", post(handlers::post_event))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), BoardcastError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BoardcastError::Transport {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| BoardcastError::Transport {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
