// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Boardcast unfurl service.
//!
//! Exposes the Slack Events API endpoint and a health endpoint, and houses
//! the per-event orchestration: challenge short-circuit, per-link fan-out,
//! all-or-nothing aggregation, outbound unfurl post.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
