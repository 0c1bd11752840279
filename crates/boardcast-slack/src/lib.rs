// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack surface for Boardcast.
//!
//! Turns work-item records into Slack attachments — HTML sanitization,
//! contact-to-mailto conversion, the type/color/emoji mapping — and posts
//! the aggregated unfurl map through `chat.unfurl`.

pub mod card;
pub mod client;
pub mod mention;
pub mod text;

pub use card::{Attachment, AttachmentField, UnfurlMap, build_attachment};
pub use client::SlackClient;
pub use mention::to_mailto;
pub use text::sanitize;
