//! Parser for a single lift line.
//!
//! A lift line is a shorthand token (optionally reached through a shortcut
//! substitution and optionally carrying `#` modifiers), followed by the work
//! text handled by the weight/rep grammar. This parser is also used
//! standalone on isolated fragments for live-typing hints, so it assigns no
//! line number or date.

use crate::error::ParseError;
use crate::grammar::parse_sets;
use crate::types::Lift;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// First word-character run of the line, checked against the shortcut table
static RE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Leading shorthand token: letter-led word, optional `#` modifier suffix,
/// optional single trailing space
static RE_SHORTHAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<shorthand>[A-Za-z]\w*)(?:#(?P<modifiers>\w+))? ?").unwrap());

/// Parse one non-empty, non-comment, non-date, non-duration line into a
/// [`Lift`], expanding the first token through `shortcuts` when it matches.
///
/// Fails with the first fatal grammar error; callers using this for live
/// hints should treat an error as "no hint available yet".
pub fn parse_lift(line: &str, shortcuts: &HashMap<String, String>) -> Result<Lift, ParseError> {
    let mut rest = line;

    let is_superset = match rest.strip_prefix("SS ") {
        Some(stripped) => {
            rest = stripped;
            true
        }
        None => false,
    };

    // Substitute the first occurrence of a known shortcut prefix.
    let expanded = match RE_PREFIX.find(rest) {
        Some(m) => match shortcuts.get(m.as_str()) {
            Some(expansion) => rest.replacen(m.as_str(), expansion, 1),
            None => rest.to_string(),
        },
        None => rest.to_string(),
    };

    let caps = RE_SHORTHAND
        .captures(&expanded)
        .ok_or_else(|| ParseError::InvalidShorthand(line.to_string()))?;
    let shorthand = caps["shorthand"].to_string();
    let modifiers = caps
        .name("modifiers")
        .map(|m| split_modifiers(m.as_str()));

    let matched_end = caps.get(0).map_or(0, |m| m.end());
    let work = expanded[matched_end..].to_string();
    let sets = parse_sets(&work)?;

    Ok(Lift {
        shorthand,
        modifiers,
        work,
        sets,
        line: None,
        date: None,
        is_superset,
    })
}

/// Segment a modifier string before each uppercase letter (`"BDb"` ->
/// `["B", "Db"]`).
///
/// Known fragility: a multi-letter lowercase-only code cannot be expressed,
/// since every code is assumed to start uppercase. Kept for log-format
/// compatibility.
fn split_modifiers(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in raw.char_indices() {
        if idx > 0 && ch.is_ascii_uppercase() {
            parts.push(raw[start..idx].to_string());
            start = idx;
        }
    }
    if start < raw.len() {
        parts.push(raw[start..].to_string());
    }
    parts
}
