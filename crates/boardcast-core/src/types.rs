// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound Slack Events API payload model.
//!
//! Only the fields the unfurl flow reads are modeled; Slack sends more
//! (team ids, api app ids, event ids) and serde ignores them.

use serde::Deserialize;

/// Outer envelope of a Slack Events API delivery.
///
/// A `url_verification` handshake carries `challenge` and nothing else the
/// service cares about; a real `event_callback` carries `event`.
#[derive(Debug, Clone, Deserialize)]
pub struct EventCallback {
    /// Present only on the verification handshake.
    #[serde(default)]
    pub challenge: Option<String>,

    /// The wrapped event. Absent on handshakes.
    #[serde(default)]
    pub event: Option<LinkSharedEvent>,
}

/// A `link_shared` event: a message in `channel` contained `links`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSharedEvent {
    /// Channel the message was posted in.
    pub channel: String,

    /// Timestamp identifying the message to attach unfurls to.
    pub message_ts: String,

    /// Detected links, one entry per link in the message.
    pub links: Vec<SharedLink>,
}

/// A single detected link.
#[derive(Debug, Clone, Deserialize)]
pub struct SharedLink {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_handshake_deserializes() {
        let json = r#"{"token":"t","challenge":"abc123","type":"url_verification"}"#;
        let event: EventCallback = serde_json::from_str(json).unwrap();
        assert_eq!(event.challenge.as_deref(), Some("abc123"));
        assert!(event.event.is_none());
    }

    #[test]
    fn link_shared_event_deserializes() {
        let json = r#"{
            "token": "t",
            "type": "event_callback",
            "event": {
                "type": "link_shared",
                "channel": "C12345",
                "message_ts": "1609459200.000100",
                "links": [
                    {"url": "https://corp.visualstudio.com/Proj/_workitems/edit/42", "domain": "visualstudio.com"}
                ]
            }
        }"#;
        let event: EventCallback = serde_json::from_str(json).unwrap();
        assert!(event.challenge.is_none());
        let inner = event.event.unwrap();
        assert_eq!(inner.channel, "C12345");
        assert_eq!(inner.message_ts, "1609459200.000100");
        assert_eq!(inner.links.len(), 1);
        assert!(inner.links[0].url.ends_with("/42"));
    }

    #[test]
    fn event_without_links_is_a_parse_failure() {
        let json = r#"{"event": {"channel": "C1", "message_ts": "1.2"}}"#;
        assert!(serde_json::from_str::<EventCallback>(json).is_err());
    }
}
