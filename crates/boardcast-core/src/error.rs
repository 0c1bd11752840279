// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Boardcast unfurl service.

use thiserror::Error;

/// The primary error type used across the Boardcast crates.
#[derive(Debug, Error)]
pub enum BoardcastError {
    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The inbound webhook body could not be parsed as a Slack event.
    #[error("event parse error: {message}")]
    Parse {
        message: String,
    },

    /// A shared link carried no recognizable work-item id.
    #[error("no work-item id found in link: {url}")]
    Extraction {
        url: String,
    },

    /// HTTP failure reaching Azure DevOps or Slack.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A created-by value did not match the `Display Name <email>` shape.
    #[error("malformed contact string: {input:?}")]
    Format {
        input: String,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = BoardcastError::Extraction {
            url: "https://example.visualstudio.com/p/_workitems".into(),
        };
        assert!(err.to_string().contains("_workitems"));

        let err = BoardcastError::Transport {
            message: "connection refused".into(),
            source: Some(Box::new(std::io::Error::other("refused"))),
        };
        assert!(err.to_string().contains("connection refused"));

        let err = BoardcastError::Format {
            input: "no-brackets".into(),
        };
        assert!(err.to_string().contains("no-brackets"));
    }
}
