// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Azure DevOps work-item client for Boardcast.
//!
//! Resolves shared board links to work-item records: extracts the numeric id
//! from the `_workitems/edit/<id>` path and reads the item from the
//! work-item REST API with Basic authentication.

pub mod client;
pub mod link;
pub mod types;

pub use client::DevOpsClient;
pub use link::extract_work_item_id;
pub use types::{WorkItemFields, WorkItemRecord};
