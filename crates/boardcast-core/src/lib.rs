// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Boardcast unfurl service.
//!
//! Provides the shared error type and the inbound Slack event model used by
//! the gateway and the binary. Domain types live next to the clients that
//! produce them (`boardcast-devops`, `boardcast-slack`).

pub mod error;
pub mod types;

pub use error::BoardcastError;
pub use types::{EventCallback, LinkSharedEvent, SharedLink};
