// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! `post_event` is the unfurl orchestrator: parse the Slack event, answer
//! verification challenges immediately, otherwise fan out one fetch+build
//! pipeline per shared link, join, and post the aggregated map back.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    Json,
};
use boardcast_core::{BoardcastError, EventCallback, LinkSharedEvent};
use boardcast_slack::card::UnfurlMap;
use boardcast_slack::build_attachment;
use futures::future::try_join_all;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// POST /slack/events
///
/// Always answers 200: Slack retries non-200 deliveries, and a payload that
/// failed once will fail the same way again. Pipeline failures are logged.
/// The response is sent only after the fan-out and the outbound post have
/// completed.
pub async fn post_event(State(state): State<GatewayState>, body: String) -> Response {
    let event: EventCallback = match serde_json::from_str(&body) {
        Ok(event) => event,
        Err(e) => {
            error!(error = %e, "inbound event body did not parse");
            return ack();
        }
    };

    // Verification handshake: echo the challenge, nothing else runs.
    if let Some(challenge) = event.challenge {
        debug!("answering url_verification challenge");
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            challenge,
        )
            .into_response();
    }

    let Some(event) = event.event else {
        warn!("event callback without challenge or event payload");
        return ack();
    };

    match resolve_links(&state, &event).await {
        Ok(unfurls) => {
            if let Err(e) = state
                .slack
                .unfurl(&event.channel, &event.message_ts, &unfurls)
                .await
            {
                error!(channel = %event.channel, error = %e, "posting unfurls failed");
            }
        }
        Err(e) => {
            // All-or-nothing: one failed link abandons the whole batch and
            // nothing is posted for the links that did resolve.
            error!(channel = %event.channel, error = %e, "link pipeline failed, batch abandoned");
        }
    }

    ack()
}

/// Fan out fetch+build over every shared link and join on all of them.
///
/// Each link's pipeline is independent and owns its own map key, so the
/// aggregation needs no synchronization. There is no concurrency cap.
async fn resolve_links(
    state: &GatewayState,
    event: &LinkSharedEvent,
) -> Result<UnfurlMap, BoardcastError> {
    let pairs = try_join_all(event.links.iter().map(|link| async move {
        let item = state.devops.fetch_by_link(&link.url).await?;
        let card = build_attachment(&item)?;
        debug!(url = %link.url, id = item.id, "link resolved");
        Ok::<_, BoardcastError>((link.url.clone(), card))
    }))
    .await?;

    Ok(pairs.into_iter().collect())
}

/// The fixed empty-bodied 200 acknowledgment.
fn ack() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        String::new(),
    )
        .into_response()
}

/// GET /health
///
/// Returns status of the gateway.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
