// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `boardcast serve` command implementation.
//!
//! Checks that the credentials the unfurl flow needs are configured, builds
//! the two outbound clients, and runs the gateway until the process exits.

use boardcast_config::model::BoardcastConfig;
use boardcast_core::BoardcastError;
use boardcast_devops::DevOpsClient;
use boardcast_gateway::{GatewayState, ServerConfig, start_server};
use boardcast_slack::SlackClient;
use tracing::info;

/// Runs the `boardcast serve` command.
pub async fn run_serve(config: BoardcastConfig) -> Result<(), BoardcastError> {
    init_tracing(&config.server.log_level);

    if let Err(errors) = boardcast_config::require_serve_credentials(&config) {
        boardcast_config::render_errors(&errors);
        return Err(BoardcastError::Config(
            "missing credentials, see diagnostics above".into(),
        ));
    }

    info!("starting boardcast serve");

    let devops = DevOpsClient::new(&config.devops)?;
    let slack_token = config
        .slack
        .token
        .clone()
        .ok_or_else(|| BoardcastError::Config("slack.token is required".into()))?;
    let slack = SlackClient::new(slack_token)?;

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    start_server(&server_config, GatewayState::new(devops, slack)).await
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("boardcast={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serve_without_credentials_is_a_config_error() {
        let err = run_serve(BoardcastConfig::default()).await.unwrap_err();
        assert!(matches!(err, BoardcastError::Config(_)));
    }
}
