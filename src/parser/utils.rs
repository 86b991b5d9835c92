//! Utility functions for page parsing.
//!
//! Shared text clean-up used when turning HTML nodes into tree elements.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n+").unwrap());

/// Decode named and numeric HTML entities in a single pass.
///
/// Non-breaking spaces become plain spaces so headings such as
/// `Etymology&nbsp;1` compare equal to their typed form.
///
/// # Examples
///
/// ```
/// # use wiktree::parser::utils::decode_entities;
/// assert_eq!(decode_entities("bread&nbsp;&amp;&nbsp;butter"), "bread & butter");
/// assert_eq!(decode_entities("Caf&eacute;&#91;edit&#93;"), "Café[edit]");
/// ```
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).replace('\u{00A0}', " ")
}

/// Single-line text: entities decoded, whitespace runs collapsed to one space.
///
/// # Examples
///
/// ```
/// # use wiktree::parser::utils::normalize_inline;
/// assert_eq!(normalize_inline("  Noun\n  [edit] "), "Noun [edit]");
/// ```
pub fn normalize_inline(input: &str) -> String {
    WHITESPACE_RE
        .replace_all(decode_entities(input).trim(), " ")
        .to_string()
}

/// Block text: entities decoded, lines trimmed, runs of blank lines dropped.
pub fn normalize_block(input: &str) -> String {
    let decoded = decode_entities(input);
    let lines: Vec<&str> = decoded.lines().map(str::trim).collect();
    BLANK_LINES_RE
        .replace_all(lines.join("\n").trim(), "\n")
        .to_string()
}
