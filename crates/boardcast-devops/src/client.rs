// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Azure DevOps work-item REST API.
//!
//! Provides [`DevOpsClient`] which handles request construction and Basic
//! authentication. Credentials are taken from the configuration at
//! construction time and live inside the client value; there is no
//! process-global auth state.

use boardcast_config::model::DevOpsConfig;
use boardcast_core::BoardcastError;
use tracing::debug;

use crate::link::extract_work_item_id;
use crate::types::WorkItemRecord;

/// Work-item API version this client speaks.
const API_VERSION: &str = "1.0";

/// HTTP client for Azure DevOps work-item reads.
#[derive(Debug, Clone)]
pub struct DevOpsClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    token: String,
}

impl DevOpsClient {
    /// Creates a new client from the `[devops]` config section.
    ///
    /// Requires `server`, `username`, and `token` to be set.
    pub fn new(config: &DevOpsConfig) -> Result<Self, BoardcastError> {
        let server = config
            .server
            .as_deref()
            .ok_or_else(|| BoardcastError::Config("devops.server is required".into()))?;
        let username = config
            .username
            .as_deref()
            .ok_or_else(|| BoardcastError::Config("devops.username is required".into()))?;
        let token = config
            .token
            .as_deref()
            .ok_or_else(|| BoardcastError::Config("devops.token is required".into()))?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| BoardcastError::Transport {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: format!("https://{server}"),
            username: username.to_string(),
            token: token.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Fetches a single work item by id.
    ///
    /// Transport and HTTP errors propagate unmodified; there is no retry.
    pub async fn get_work_item(&self, id: u64) -> Result<WorkItemRecord, BoardcastError> {
        let url = format!(
            "{}/DefaultCollection/_apis/wit/workitems/{id}?api-version={API_VERSION}",
            self.base_url
        );

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.token))
            .send()
            .await
            .map_err(|e| BoardcastError::Transport {
                message: format!("work-item request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(id, status = %status, "work-item response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoardcastError::Transport {
                message: format!("work-item API returned {status} for id {id}: {body}"),
                source: None,
            });
        }

        response
            .json::<WorkItemRecord>()
            .await
            .map_err(|e| BoardcastError::Transport {
                message: format!("failed to parse work-item {id}: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Resolves a shared link to its work-item record.
    ///
    /// Extraction failures surface before any request is made.
    pub async fn fetch_by_link(&self, url: &str) -> Result<WorkItemRecord, BoardcastError> {
        let id = extract_work_item_id(url)?;
        self.get_work_item(id).await
    }
}
