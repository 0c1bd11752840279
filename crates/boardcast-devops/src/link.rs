// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Work-item id extraction from shared board links.

use std::sync::LazyLock;

use boardcast_core::BoardcastError;
use regex::Regex;

/// Matches the work-item editor path, e.g.
/// `https://corp.visualstudio.com/Proj/_workitems/edit/4321`.
static ID_MATCHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_workitems/edit/(\d+)").unwrap());

/// Extract the numeric work-item id from a shared link.
///
/// Links without an `_workitems/edit/<digits>` path segment fail with
/// [`BoardcastError::Extraction`].
pub fn extract_work_item_id(url: &str) -> Result<u64, BoardcastError> {
    let captures = ID_MATCHER
        .captures(url)
        .ok_or_else(|| BoardcastError::Extraction { url: url.to_string() })?;

    captures[1]
        .parse::<u64>()
        .map_err(|_| BoardcastError::Extraction { url: url.to_string() })
}
