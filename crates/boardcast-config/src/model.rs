// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Boardcast.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Boardcast configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; the credentials inside `[devops]` and `[slack]` are checked only
/// when the server actually starts.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoardcastConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Azure DevOps (VSTS) connection settings.
    #[serde(default)]
    pub devops: DevOpsConfig,

    /// Slack API settings.
    #[serde(default)]
    pub slack: SlackConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Azure DevOps connection configuration.
///
/// `server` is the account hostname, e.g. `corp.visualstudio.com`. The
/// username/token pair becomes the HTTP Basic credential on work-item reads.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DevOpsConfig {
    /// Account hostname. `None` means not configured.
    #[serde(default)]
    pub server: Option<String>,

    /// Username for Basic auth.
    #[serde(default)]
    pub username: Option<String>,

    /// Personal access token for Basic auth.
    #[serde(default)]
    pub token: Option<String>,
}

/// Slack API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlackConfig {
    /// OAuth token passed to `chat.unfurl`. `None` means not configured.
    #[serde(default)]
    pub token: Option<String>,
}
