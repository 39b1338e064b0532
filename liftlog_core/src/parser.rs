//! Line-oriented log parser.
//!
//! Scans a whole log document once, classifying every line as blank,
//! comment, shortcut definition, date header, duration annotation or lift
//! line, and accumulates sessions, a shortcut table and a per-line error
//! map. One malformed line never aborts the scan: lift parse failures are
//! recorded against their line number and parsing continues.

use crate::lift::parse_lift;
use crate::types::{Log, ParsedLog, ParsingMetadata, Session};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

static RE_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());
static RE_SHORTCUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<shortcut>\w+)\s*=\s*(?P<expansion>[\w#]+)").unwrap());
static RE_DURATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?P<minutes>\d+)'").unwrap());

/// Parse a full log document into sessions, errors, the final shortcut
/// table and parse metadata.
///
/// `seed_shortcuts` (typically from [`crate::Config`]) is cloned into a
/// table local to this call; definition lines in the log upsert over it.
/// The function never fails: malformed lift lines, durations outside a
/// session and lifts before the first date header all land in the error
/// map keyed by 1-based line number.
pub fn parse_log(log: &Log, seed_shortcuts: &HashMap<String, String>) -> ParsedLog {
    let mut sessions: Vec<Session> = Vec::new();
    let mut errors: BTreeMap<usize, String> = BTreeMap::new();
    let mut metadata = ParsingMetadata::default();
    let mut shortcuts = seed_shortcuts.clone();

    tracing::debug!(log_id = %log.id, "parsing log");

    let mut current_date: Option<String> = None;
    let mut line_number = 0usize;

    for line in log.text.split('\n') {
        line_number += 1;

        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        if let Some(caps) = RE_SHORTCUT.captures(line) {
            shortcuts.insert(caps["shortcut"].to_string(), caps["expansion"].to_string());
            continue;
        }

        if RE_DATE.is_match(line) {
            if let Some(previous) = sessions.last_mut() {
                previous.end_line = line_number - 1;
            }
            metadata.last_session_start_line = Some(line_number - 1);

            let date = line.trim().to_string();
            if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
                tracing::warn!(line = line_number, date = %date, "header is not a plain calendar date");
            }
            sessions.push(Session {
                date: date.clone(),
                lifts: Vec::new(),
                start_line: line_number,
                end_line: line_number,
                duration: None,
            });
            current_date = Some(date);
            continue;
        }

        if let Some(caps) = RE_DURATION.captures(line) {
            match sessions.last_mut() {
                Some(session) => session.duration = caps["minutes"].parse().ok(),
                None => {
                    errors.insert(
                        line_number,
                        "Duration specified outside of a session".to_string(),
                    );
                }
            }
            continue;
        }

        let date = match current_date.as_ref() {
            Some(date) => date,
            None => {
                tracing::warn!(line = line_number, "unknown date for lift");
                errors.insert(line_number, "Unknown date for lift".to_string());
                continue;
            }
        };

        match parse_lift(line, &shortcuts) {
            Ok(mut lift) => {
                lift.line = Some(line_number);
                lift.date = Some(date.clone());
                if let Some(session) = sessions.last_mut() {
                    session.lifts.push(lift);
                }
            }
            Err(e) => {
                tracing::error!(line = line_number, error = %e, "failed to parse lift line");
                errors.insert(line_number, e.to_string());
            }
        }
    }

    if let Some(last) = sessions.last_mut() {
        last.end_line = line_number;
    }

    ParsedLog {
        sessions,
        errors,
        shortcuts,
        metadata,
    }
}
