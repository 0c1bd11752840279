// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses and non-empty credentials.

use crate::diagnostic::ConfigError;
use crate::model::BoardcastConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
///
/// Presence of credentials is NOT checked here — `boardcast config` must work
/// on a partial config. The serve path enforces required credentials via
/// [`require_serve_credentials`].
pub fn validate_config(config: &BoardcastConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must be non-zero".to_string(),
        });
    }

    // A set-but-empty credential is always a mistake.
    for (key, value) in [
        ("devops.server", &config.devops.server),
        ("devops.username", &config.devops.username),
        ("devops.token", &config.devops.token),
        ("slack.token", &config.slack.token),
    ] {
        if let Some(v) = value
            && v.trim().is_empty()
        {
            errors.push(ConfigError::Validation {
                message: format!("{key} is set but empty"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Check that every credential the serve path needs is present.
///
/// Returns the missing key names so the caller can report them all at once.
pub fn require_serve_credentials(config: &BoardcastConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (key, value) in [
        ("devops.server", &config.devops.server),
        ("devops.username", &config.devops.username),
        ("devops.token", &config.devops.token),
        ("slack.token", &config.slack.token),
    ] {
        if value.is_none() {
            errors.push(ConfigError::MissingKey {
                key: key.to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DevOpsConfig, SlackConfig};

    fn full_config() -> BoardcastConfig {
        BoardcastConfig {
            devops: DevOpsConfig {
                server: Some("corp.visualstudio.com".into()),
                username: Some("svc-unfurl".into()),
                token: Some("pat-token".into()),
            },
            slack: SlackConfig {
                token: Some("xoxb-token".into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&BoardcastConfig::default()).is_ok());
    }

    #[test]
    fn empty_host_is_rejected() {
        let mut config = BoardcastConfig::default();
        config.server.host = "  ".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("server.host")));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = BoardcastConfig::default();
        config.server.port = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("server.port")));
    }

    #[test]
    fn empty_credential_is_rejected() {
        let mut config = full_config();
        config.slack.token = Some(String::new());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("slack.token")));
    }

    #[test]
    fn serve_credentials_all_present() {
        assert!(require_serve_credentials(&full_config()).is_ok());
    }

    #[test]
    fn serve_credentials_reports_every_missing_key() {
        let errors = require_serve_credentials(&BoardcastConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
