// SPDX-FileCopyrightText: 2026 Boardcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML sanitization for work-item rich-text fields.
//!
//! Tracker descriptions and repro steps arrive as HTML fragments. Slack
//! attachment text wants plain text, so tags are stripped and a small fixed
//! set of entities is decoded. Stripping happens BEFORE decoding: a decoded
//! `&lt;b&gt;` must not reassemble into a tag that a later pass would eat.

use std::sync::LazyLock;

use regex::Regex;

/// Opening-or-closing tag, tolerant of a missing `>` at end of input.
static TAG_MATCHER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").unwrap());

/// The closed set of entities this sanitizer decodes, applied in order.
/// Anything not listed here passes through verbatim.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&apos;", "'"),
    ("&#x27;", "'"),
    ("&#x2F;", "/"),
    ("&#39;", "'"),
    ("&#47;", "/"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&nbsp;", " "),
    ("&quot;", "\""),
];

/// Remove HTML-tag-like substrings.
pub fn strip_html(raw: &str) -> String {
    TAG_MATCHER.replace_all(raw, "").into_owned()
}

/// Decode the fixed entity set, sequentially in table order.
pub fn decode_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (entity, replacement) in ENTITIES {
        result = result.replace(entity, replacement);
    }
    result
}

/// Sanitize a rich-text field value: strip tags, then decode entities.
///
/// `None` and empty input both yield the empty string.
pub fn sanitize(raw: Option<&str>) -> String {
    match raw {
        None => String::new(),
        Some("") => String::new(),
        Some(s) => decode_entities(&strip_html(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_yields_empty() {
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("")), "");
    }

    #[test]
    fn strips_simple_tags() {
        assert_eq!(sanitize(Some("<b>x</b>")), "x");
        assert_eq!(sanitize(Some("<div><p>steps</p></div>")), "steps");
    }

    #[test]
    fn strips_unterminated_tag_at_end() {
        assert_eq!(sanitize(Some("done<br")), "done");
    }

    #[test]
    fn decodes_known_entities() {
        assert_eq!(sanitize(Some("a &amp; b")), "a & b");
        assert_eq!(sanitize(Some("it&apos;s &quot;fine&quot;")), "it's \"fine\"");
        assert_eq!(sanitize(Some("1&nbsp;of&nbsp;2")), "1 of 2");
        assert_eq!(sanitize(Some("x &lt; y &gt; z")), "x < y > z");
        assert_eq!(sanitize(Some("a&#x2F;b&#47;c")), "a/b/c");
        assert_eq!(sanitize(Some("don&#39;t &#x27;quote&#x27;")), "don't 'quote'");
    }

    #[test]
    fn unknown_entities_pass_through() {
        assert_eq!(sanitize(Some("caf&eacute;")), "caf&eacute;");
        assert_eq!(sanitize(Some("&#1234;")), "&#1234;");
    }

    #[test]
    fn decoded_angle_brackets_do_not_reassemble_tags() {
        // Stripping runs first, so entity-encoded markup survives as text.
        assert_eq!(sanitize(Some("&lt;b&gt;bold&lt;/b&gt;")), "<b>bold</b>");
    }

    #[test]
    fn tags_and_entities_together() {
        assert_eq!(
            sanitize(Some("<div>Click &quot;Save&quot; &amp; wait</div>")),
            "Click \"Save\" & wait"
        );
    }
}
