// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for Slack's `chat.unfurl` API.
//!
//! Posts the aggregated unfurl map for a message. Authentication is the
//! legacy query-string token form the unfurl endpoint accepts.

use boardcast_core::BoardcastError;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::card::UnfurlMap;

/// Base URL for the Slack Web API.
const API_BASE_URL: &str = "https://slack.com";

/// Envelope every Slack Web API call answers with.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for posting unfurls back to Slack.
#[derive(Debug, Clone)]
pub struct SlackClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl SlackClient {
    /// Creates a new Slack client with the given OAuth token.
    pub fn new(token: String) -> Result<Self, BoardcastError> {
        if token.is_empty() {
            return Err(BoardcastError::Config("slack.token cannot be empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| BoardcastError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            token,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Post the unfurl map for the message identified by `channel` + `ts`.
    ///
    /// The `unfurls` form value is the JSON-stringified map. A transport or
    /// HTTP failure is an error; an API-level `"ok": false` is logged and
    /// otherwise ignored, since the inbound webhook has already been served.
    pub async fn unfurl(
        &self,
        channel: &str,
        ts: &str,
        unfurls: &UnfurlMap,
    ) -> Result<(), BoardcastError> {
        let unfurls_json = serde_json::to_string(unfurls)
            .map_err(|e| BoardcastError::Internal(format!("unfurl map serialization: {e}")))?;

        let response = self
            .client
            .post(format!("{}/api/chat.unfurl", self.base_url))
            .query(&[("token", self.token.as_str())])
            .form(&[
                ("channel", channel),
                ("ts", ts),
                ("unfurls", unfurls_json.as_str()),
            ])
            .send()
            .await
            .map_err(|e| BoardcastError::Transport {
                message: format!("chat.unfurl request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoardcastError::Transport {
                message: format!("chat.unfurl returned {status}: {body}"),
                source: None,
            });
        }

        match response.json::<ApiResponse>().await {
            Ok(api) if api.ok => {
                debug!(channel, ts, count = unfurls.len(), "unfurl posted");
            }
            Ok(api) => {
                warn!(
                    channel,
                    ts,
                    error = api.error.as_deref().unwrap_or("unknown"),
                    "chat.unfurl answered not-ok"
                );
            }
            Err(e) => {
                warn!(channel, ts, error = %e, "chat.unfurl answered non-JSON");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Attachment, AttachmentField};
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> SlackClient {
        SlackClient::new("xoxb-test".into())
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn sample_map() -> UnfurlMap {
        let mut map = UnfurlMap::new();
        map.insert(
            "https://corp.visualstudio.com/P/_workitems/edit/1".into(),
            Attachment {
                color: Some("#cc293d".into()),
                pretext: "t".into(),
                author_name: ":glitch_crab: BUG 1".into(),
                title: "Discription".into(),
                text: "body".into(),
                fields: vec![AttachmentField {
                    title: "State".into(),
                    value: "Active".into(),
                    short: false,
                }],
                footer: "Created".into(),
                ts: Some(1609459200),
            },
        );
        map
    }

    #[tokio::test]
    async fn unfurl_posts_form_with_token_in_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat.unfurl"))
            .and(query_param("token", "xoxb-test"))
            .and(body_string_contains("channel=C123"))
            .and(body_string_contains("ts=1.2"))
            .and(body_string_contains("unfurls="))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server.uri())
            .unfurl("C123", "1.2", &sample_map())
            .await;
        assert!(result.is_ok(), "{result:?}");
    }

    #[tokio::test]
    async fn api_not_ok_is_logged_not_fatal() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat.unfurl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"ok": false, "error": "cannot_unfurl_url"}),
            ))
            .mount(&server)
            .await;

        let result = test_client(&server.uri())
            .unfurl("C123", "1.2", &sample_map())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn http_error_is_transport() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat.unfurl"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .unfurl("C123", "1.2", &sample_map())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardcastError::Transport { .. }));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(
            SlackClient::new(String::new()).unwrap_err(),
            BoardcastError::Config(_)
        ));
    }
}
