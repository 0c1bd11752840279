// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./boardcast.toml` > `~/.config/boardcast/boardcast.toml`
//! > `/etc/boardcast/boardcast.toml` with environment variable overrides via
//! the `BOARDCAST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::BoardcastConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/boardcast/boardcast.toml` (system-wide)
/// 3. `~/.config/boardcast/boardcast.toml` (user XDG config)
/// 4. `./boardcast.toml` (local directory)
/// 5. `BOARDCAST_*` environment variables
pub fn load_config() -> Result<BoardcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BoardcastConfig::default()))
        .merge(Toml::file("/etc/boardcast/boardcast.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("boardcast/boardcast.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("boardcast.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<BoardcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BoardcastConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BoardcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BoardcastConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BOARDCAST_SERVER_LOG_LEVEL` must map to
/// `server.log_level`, not `server.log.level`.
fn env_provider() -> Env {
    Env::prefixed("BOARDCAST_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: BOARDCAST_DEVOPS_TOKEN -> "devops_token"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("devops_", "devops.", 1)
            .replacen("slack_", "slack.", 1);
        mapped.into()
    })
}
