//! Lookup index over parsed sessions.
//!
//! Rebuilt wholesale from a session slice after every parse; borrows the
//! sessions and never mutates them, so the borrow checker enforces that the
//! index cannot outlive the parse result it was built from.

use crate::types::{Lift, Session};
use std::collections::HashMap;

/// Read-only query index over a parsed session list
pub struct LiftCache<'a> {
    sessions: &'a [Session],
    line_to_lift: HashMap<usize, &'a Lift>,
    shorthand_to_lifts: HashMap<String, Vec<&'a Lift>>,
}

impl<'a> LiftCache<'a> {
    /// Build the index in one document-order pass.
    ///
    /// The log parser stamps every lift with its session's date; a lift
    /// that disagrees (or was never stamped) indicates a bug upstream and
    /// is reported, not repaired.
    pub fn new(sessions: &'a [Session]) -> Self {
        let mut line_to_lift = HashMap::new();
        let mut shorthand_to_lifts: HashMap<String, Vec<&'a Lift>> = HashMap::new();

        for session in sessions {
            for lift in &session.lifts {
                if lift.date.as_deref() != Some(session.date.as_str()) {
                    tracing::warn!(
                        shorthand = %lift.shorthand,
                        line = ?lift.line,
                        session_date = %session.date,
                        lift_date = ?lift.date,
                        "lift date disagrees with its session"
                    );
                }
                shorthand_to_lifts
                    .entry(lift.shorthand.clone())
                    .or_default()
                    .push(lift);
                if let Some(line) = lift.line {
                    line_to_lift.insert(line, lift);
                }
            }
        }

        Self {
            sessions,
            line_to_lift,
            shorthand_to_lifts,
        }
    }

    /// The most recent session of the log, if any
    pub fn last_session(&self) -> Option<&'a Session> {
        self.sessions.last()
    }

    /// The lift recorded on the given 1-based line
    pub fn lift_at_line(&self, line: usize) -> Option<&'a Lift> {
        self.line_to_lift.get(&line).copied()
    }

    /// The session whose line range contains the given line.
    ///
    /// Linear scan; logs are hundreds of lines, not millions.
    pub fn session_at_line(&self, line: usize) -> Option<&'a Session> {
        self.sessions
            .iter()
            .find(|session| session.start_line <= line && line <= session.end_line)
    }

    /// The training date covering the given line
    pub fn date_at_line(&self, line: usize) -> Option<&'a str> {
        self.session_at_line(line).map(|session| session.date.as_str())
    }

    /// Every occurrence of the lift's exercise, in document order
    pub fn lift_history(&self, lift: &Lift) -> &[&'a Lift] {
        self.shorthand_to_lifts
            .get(&lift.shorthand)
            .map(|lifts| lifts.as_slice())
            .unwrap_or(&[])
    }

    /// The most recent occurrence of `shorthand` strictly before `date`
    /// (ISO string comparison).
    ///
    /// Returns `None` for an unknown shorthand or when every occurrence is
    /// on or after the date. A history entry without a date violates the
    /// parser's invariant; the scan stops and reports nothing.
    pub fn find_previous_lift(&self, shorthand: &str, date: &str) -> Option<&'a Lift> {
        let history = self.shorthand_to_lifts.get(shorthand)?;

        for lift in history.iter().rev() {
            let lift_date = match lift.date.as_deref() {
                Some(d) => d,
                None => {
                    tracing::error!(%shorthand, line = ?lift.line, "history entry has no date");
                    return None;
                }
            };
            if lift_date < date {
                return Some(lift);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_log;
    use crate::types::Log;
    use std::collections::HashMap;

    fn sample_sessions() -> Vec<Session> {
        let log = Log {
            id: "test".into(),
            text: "2024-01-01\nBP#B 100 8,8\nSQ 140 5\n\n2024-01-05\nBP#B 102.5 8\n\n2024-01-09\nBP#B 105 6\nDL 180 3"
                .into(),
        };
        parse_log(&log, &HashMap::new()).sessions
    }

    #[test]
    fn test_lift_at_line() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        assert_eq!(cache.lift_at_line(2).map(|l| l.shorthand.as_str()), Some("BP"));
        assert_eq!(cache.lift_at_line(3).map(|l| l.shorthand.as_str()), Some("SQ"));
        assert!(cache.lift_at_line(1).is_none());
        assert!(cache.lift_at_line(99).is_none());
    }

    #[test]
    fn test_session_at_line_boundaries() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        assert_eq!(cache.session_at_line(1).map(|s| s.date.as_str()), Some("2024-01-01"));
        assert_eq!(cache.session_at_line(4).map(|s| s.date.as_str()), Some("2024-01-01"));
        assert_eq!(cache.session_at_line(5).map(|s| s.date.as_str()), Some("2024-01-05"));
        assert_eq!(cache.session_at_line(9).map(|s| s.date.as_str()), Some("2024-01-09"));
        assert!(cache.session_at_line(99).is_none());
    }

    #[test]
    fn test_date_at_line() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        assert_eq!(cache.date_at_line(6), Some("2024-01-05"));
        assert_eq!(cache.date_at_line(42), None);
    }

    #[test]
    fn test_lift_history_in_document_order() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        let bp = cache.lift_at_line(2).unwrap();
        let history = cache.lift_history(bp);
        let dates: Vec<&str> = history.iter().filter_map(|l| l.date.as_deref()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-05", "2024-01-09"]);
    }

    #[test]
    fn test_lift_history_unknown_shorthand_is_empty() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        let stranger = Lift {
            shorthand: "OHP".into(),
            modifiers: None,
            work: String::new(),
            sets: vec![],
            line: None,
            date: None,
            is_superset: false,
        };
        assert!(cache.lift_history(&stranger).is_empty());
    }

    #[test]
    fn test_find_previous_lift_strictly_earlier() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        // Same-date occurrences are never returned.
        let previous = cache.find_previous_lift("BP", "2024-01-09").unwrap();
        assert_eq!(previous.date.as_deref(), Some("2024-01-05"));

        let previous = cache.find_previous_lift("BP", "2024-01-05").unwrap();
        assert_eq!(previous.date.as_deref(), Some("2024-01-01"));

        // Nothing earlier than the first occurrence.
        assert!(cache.find_previous_lift("BP", "2024-01-01").is_none());

        // Unknown shorthand.
        assert!(cache.find_previous_lift("OHP", "2024-01-09").is_none());
    }

    #[test]
    fn test_find_previous_lift_picks_nearest_of_earlier_dates() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);

        let previous = cache.find_previous_lift("BP", "2024-02-01").unwrap();
        assert_eq!(previous.date.as_deref(), Some("2024-01-09"));
    }

    #[test]
    fn test_undated_history_entry_aborts_scan() {
        let mut sessions = sample_sessions();
        // Corrupt one entry the way only an upstream bug could.
        sessions[0].lifts[0].date = None;
        let cache = LiftCache::new(&sessions);

        assert!(cache.find_previous_lift("BP", "2024-01-05").is_none());
    }

    #[test]
    fn test_last_session() {
        let sessions = sample_sessions();
        let cache = LiftCache::new(&sessions);
        assert_eq!(cache.last_session().map(|s| s.date.as_str()), Some("2024-01-09"));

        let empty: Vec<Session> = Vec::new();
        let cache = LiftCache::new(&empty);
        assert!(cache.last_session().is_none());
    }
}
