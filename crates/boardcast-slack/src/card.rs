// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Work-item record to Slack attachment mapping.
//!
//! One attachment per unfurled link: colored by item type, titled with the
//! item title, body text from the description (or repro steps for Bugs),
//! and a fixed field block of State / Severity / Created By, with a
//! conditional "Deployed To" lane for in-flight Bugs and User Stories.

use std::collections::BTreeMap;

use boardcast_core::BoardcastError;
use boardcast_devops::WorkItemRecord;
use serde::Serialize;

use crate::mention::to_mailto;
use crate::text::sanitize;

/// Aggregated unfurls keyed by the shared link URL.
pub type UnfurlMap = BTreeMap<String, Attachment>;

/// Sidebar color per work-item type.
fn color_for(kind: &str) -> Option<&'static str> {
    match kind {
        "Epic" => Some("#ff7b00"),
        "Feature" => Some("#773b93"),
        "User Story" => Some("#009ccc"),
        "Bug" => Some("#cc293d"),
        "Request" => Some("#339947"),
        "Task" => Some("#f2cb1d"),
        _ => None,
    }
}

/// Author-line emoji per work-item type.
fn emoji_for(kind: &str) -> Option<&'static str> {
    match kind {
        "Epic" => Some(":crown:"),
        "Feature" => Some(":trophy:"),
        "User Story" => Some(":book:"),
        "Bug" => Some(":glitch_crab:"),
        "Request" => Some(":memo:"),
        "Task" => Some(":spiral_note_pad:"),
        _ => None,
    }
}

/// A Slack message attachment, serialized into the unfurl map.
///
/// `color` and `ts` are omitted from the JSON when absent, matching what
/// Slack expects for unknown types and unparseable dates.
#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub pretext: String,
    pub author_name: String,
    pub title: String,
    pub text: String,
    pub fields: Vec<AttachmentField>,
    pub footer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

/// A single title/value entry in the attachment field block.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl AttachmentField {
    fn long(title: &str, value: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            short: false,
        }
    }
}

/// Build the preview attachment for a work item.
///
/// Pure function. Unknown work-item types degrade (no color, no emoji); a
/// malformed created-by contact is a hard error that aborts the whole card.
pub fn build_attachment(item: &WorkItemRecord) -> Result<Attachment, BoardcastError> {
    let kind = item.fields.work_item_type().unwrap_or("");

    let author_name = match emoji_for(kind) {
        Some(emoji) => format!("{emoji} {} {}", kind.to_uppercase(), item.id),
        None => format!("{} {}", kind.to_uppercase(), item.id),
    };

    // Bugs carry their substance in repro steps, everything else in the
    // description.
    let text = if kind == "Bug" {
        sanitize(item.fields.repro_steps())
    } else {
        sanitize(item.fields.description())
    };

    let state = item.fields.state().to_string();

    let mut fields = vec![
        AttachmentField::long("State", state.clone()),
        AttachmentField::long("Severity", item.fields.severity()),
        AttachmentField::long("Created By", to_mailto(item.fields.created_by())?),
    ];

    // Board lane only makes sense once a Bug or User Story has left "New".
    if state != "New" && (kind == "Bug" || kind == "User Story") {
        fields.push(AttachmentField::long("Deployed To", item.fields.board_lane()));
    }

    Ok(Attachment {
        color: color_for(kind).map(str::to_string),
        pretext: item.fields.title().to_string(),
        author_name,
        // Label spelled as the original board integration spells it.
        title: "Discription".to_string(),
        text,
        fields,
        footer: "Created".to_string(),
        ts: creation_epoch_seconds(item),
    })
}

/// Creation date as epoch seconds, truncated; `None` when missing or
/// unparseable.
fn creation_epoch_seconds(item: &WorkItemRecord) -> Option<i64> {
    let raw = item.fields.created_date()?;
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.timestamp())
}
