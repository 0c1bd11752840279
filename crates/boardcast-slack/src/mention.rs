// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact-string to Slack mailto-link conversion.
//!
//! The tracker reports identities as `"Display Name <email@domain>"`. Slack
//! renders `<mailto:email|Display Name>` as a clickable mention.

use std::sync::LazyLock;

use boardcast_core::BoardcastError;
use regex::Regex;

/// Display part (not ending in `<`), one space, then an angle-bracketed
/// email containing `@`.
static CONTACT_MATCHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*[^<]) (<.*@.*>)").unwrap());

/// Convert a `"Display Name <email@domain>"` value into a Slack mailto link.
///
/// `None` and empty input yield `Ok("")`. Input that does not match the
/// two-part shape is a hard [`BoardcastError::Format`] failure — the caller
/// must surface it, not swallow it.
pub fn to_mailto(raw: Option<&str>) -> Result<String, BoardcastError> {
    let raw = match raw {
        None | Some("") => return Ok(String::new()),
        Some(s) => s,
    };

    let captures = CONTACT_MATCHER
        .captures(raw)
        .ok_or_else(|| BoardcastError::Format { input: raw.to_string() })?;

    let display = &captures[1];
    let bracketed = &captures[2];
    let email = &bracketed[1..bracketed.len() - 1];

    Ok(format!("<mailto:{email}|{display}>"))
}
