// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Work-item record returned by the Azure DevOps REST API.
//!
//! The tracker exposes a flat `fields` map keyed by reference names like
//! `System.WorkItemType`. [`WorkItemFields`] keeps that map explicit and puts
//! typed accessors in front of it: missing keys read as `None`/empty rather
//! than panicking, since process templates vary per project.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// `System.WorkItemType` — Epic, Feature, User Story, Bug, Request, Task.
pub const WORK_ITEM_TYPE: &str = "System.WorkItemType";
/// `System.Title`.
pub const TITLE: &str = "System.Title";
/// `System.State` — New, Active, Resolved, ...
pub const STATE: &str = "System.State";
/// `Microsoft.VSTS.Common.Severity`.
pub const SEVERITY: &str = "Microsoft.VSTS.Common.Severity";
/// `System.CreatedBy` — `"Display Name <email>"`.
pub const CREATED_BY: &str = "System.CreatedBy";
/// `System.CreatedDate` — RFC 3339 timestamp.
pub const CREATED_DATE: &str = "System.CreatedDate";
/// `System.Description` — HTML body.
pub const DESCRIPTION: &str = "System.Description";
/// `Microsoft.VSTS.TCM.ReproSteps` — HTML body, Bugs only.
pub const REPRO_STEPS: &str = "Microsoft.VSTS.TCM.ReproSteps";
/// `System.BoardLane` — the board swimlane the item currently sits in.
pub const BOARD_LANE: &str = "System.BoardLane";

/// A work item as returned by
/// `GET /DefaultCollection/_apis/wit/workitems/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkItemRecord {
    pub id: u64,
    pub fields: WorkItemFields,
}

/// The tracker's field map with typed accessors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct WorkItemFields(pub BTreeMap<String, Value>);

impl WorkItemFields {
    /// Raw string value of a field, `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// String value of a field, empty when absent.
    pub fn str_or_empty(&self, key: &str) -> &str {
        self.get_str(key).unwrap_or("")
    }

    pub fn work_item_type(&self) -> Option<&str> {
        self.get_str(WORK_ITEM_TYPE)
    }

    pub fn title(&self) -> &str {
        self.str_or_empty(TITLE)
    }

    pub fn state(&self) -> &str {
        self.str_or_empty(STATE)
    }

    pub fn severity(&self) -> &str {
        self.str_or_empty(SEVERITY)
    }

    pub fn created_by(&self) -> Option<&str> {
        self.get_str(CREATED_BY)
    }

    pub fn created_date(&self) -> Option<&str> {
        self.get_str(CREATED_DATE)
    }

    pub fn description(&self) -> Option<&str> {
        self.get_str(DESCRIPTION)
    }

    pub fn repro_steps(&self) -> Option<&str> {
        self.get_str(REPRO_STEPS)
    }

    pub fn board_lane(&self) -> &str {
        self.str_or_empty(BOARD_LANE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: serde_json::Value) -> WorkItemRecord {
        serde_json::from_value(serde_json::json!({"id": 42, "fields": fields})).unwrap()
    }

    #[test]
    fn deserializes_tracker_response() {
        let item = record(serde_json::json!({
            "System.WorkItemType": "Bug",
            "System.Title": "Crash on save",
            "System.State": "Active",
            "System.Rev": 7
        }));
        assert_eq!(item.id, 42);
        assert_eq!(item.fields.work_item_type(), Some("Bug"));
        assert_eq!(item.fields.title(), "Crash on save");
        assert_eq!(item.fields.state(), "Active");
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let item = record(serde_json::json!({}));
        assert_eq!(item.fields.work_item_type(), None);
        assert_eq!(item.fields.title(), "");
        assert_eq!(item.fields.severity(), "");
        assert_eq!(item.fields.board_lane(), "");
        assert!(item.fields.created_date().is_none());
    }

    #[test]
    fn non_string_field_reads_as_none() {
        let item = record(serde_json::json!({"System.Title": 5}));
        assert_eq!(item.fields.get_str(TITLE), None);
        assert_eq!(item.fields.title(), "");
    }
}
