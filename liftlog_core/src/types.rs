//! Core domain types for the Liftlog parsing engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw logs and parsed training sessions
//! - Lifts and their typed weight/rep sets
//! - Parse output (sessions, per-line errors, shortcut table, metadata)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Log Types
// ============================================================================

/// A raw workout log document, owned by the storage collaborator
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Log {
    pub id: String,
    pub text: String,
}

// ============================================================================
// Set Types
// ============================================================================

/// One recorded set, with type-safe variants per notation
///
/// A rep token with `/`-separated numbers and exactly one weight always
/// resolves to `Split`, never to a one-weight `Drop`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Set {
    /// One weight, one rep count (e.g. `100 8`); `myo` marks a rest-pause
    /// set whose rep count sums its `+`-joined bursts
    Single {
        weight: f64,
        reps: u32,
        #[serde(default)]
        myo: bool,
    },
    /// One weight held or carried for a number of seconds (e.g. `100 30s`)
    Timed { weight: f64, seconds: u32 },
    /// Unilateral set: one weight, independent left/right rep counts
    /// (e.g. `24 8/6`)
    Split {
        weight: f64,
        left_reps: u32,
        right_reps: u32,
    },
    /// Drop set: N weights each paired with a rep count, N >= 2
    /// (e.g. `100/80 8/10`)
    Drop { weights: Vec<f64>, reps: Vec<u32> },
}

impl Set {
    /// Short lowercase tag for this variant, as used in CSV exports
    pub fn kind(&self) -> &'static str {
        match self {
            Set::Single { .. } => "single",
            Set::Timed { .. } => "timed",
            Set::Split { .. } => "split",
            Set::Drop { .. } => "drop",
        }
    }

    /// Tonnage moved in this set (weight x reps, summed across drops).
    ///
    /// Timed holds carry no rep volume and count as zero.
    pub fn volume(&self) -> f64 {
        match self {
            Set::Single { weight, reps, .. } => weight * f64::from(*reps),
            Set::Timed { .. } => 0.0,
            Set::Split {
                weight,
                left_reps,
                right_reps,
            } => weight * f64::from(left_reps + right_reps),
            Set::Drop { weights, reps } => weights
                .iter()
                .zip(reps)
                .map(|(w, r)| w * f64::from(*r))
                .sum(),
        }
    }

    /// The weight column as the user would write it (`100` or `100/80`)
    pub fn weight_text(&self) -> String {
        match self {
            Set::Single { weight, .. } | Set::Timed { weight, .. } | Set::Split { weight, .. } => {
                format!("{}", weight)
            }
            Set::Drop { weights, .. } => weights
                .iter()
                .map(|w| format!("{}", w))
                .collect::<Vec<_>>()
                .join("/"),
        }
    }

    /// The rep column as the user would write it (`8`, `30s`, `8/6`)
    pub fn reps_text(&self) -> String {
        match self {
            Set::Single { reps, .. } => format!("{}", reps),
            Set::Timed { seconds, .. } => format!("{}s", seconds),
            Set::Split {
                left_reps,
                right_reps,
                ..
            } => format!("{}/{}", left_reps, right_reps),
            Set::Drop { reps, .. } => reps
                .iter()
                .map(|r| format!("{}", r))
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

// ============================================================================
// Lift and Session Types
// ============================================================================

/// One exercise entry on one log line
///
/// `line` and `date` are stamped by the log parser; both stay `None` when a
/// single line is parsed standalone (live-typing hints) without document
/// context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lift {
    /// Exercise code, e.g. `BP`
    pub shorthand: String,
    /// Equipment/variant codes split from the `#` suffix, e.g. `["B"]`
    pub modifiers: Option<Vec<String>>,
    /// Raw remainder of the line after the shorthand token, kept for display
    pub work: String,
    pub sets: Vec<Set>,
    /// 1-based source line within the parsed document
    pub line: Option<usize>,
    /// ISO date of the enclosing session
    pub date: Option<String>,
    /// Line carried the `SS ` superset marker
    #[serde(default)]
    pub is_superset: bool,
}

/// One training day: a date header plus the lift lines below it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// ISO `YYYY-MM-DD` date, lexicographically sortable
    pub date: String,
    pub lifts: Vec<Lift>,
    /// 1-based inclusive range from the date header through the line before
    /// the next header (or end of document)
    pub start_line: usize,
    pub end_line: usize,
    /// Session duration in minutes, from a `N'` annotation
    pub duration: Option<u32>,
}

impl Session {
    /// Total number of sets across all lifts of the session
    pub fn total_sets(&self) -> usize {
        self.lifts.iter().map(|lift| lift.sets.len()).sum()
    }
}

// ============================================================================
// Parse Output Types
// ============================================================================

/// Side-channel facts about a parse, consumed by editor front ends
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsingMetadata {
    /// 0-based index of the last date-header line, used to split "today's
    /// entries" from history when editing
    pub last_session_start_line: Option<usize>,
}

/// Complete result of parsing one log document
///
/// Parsing never fails as a whole; malformed lines land in `errors` keyed by
/// their 1-based line number and the scan continues.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParsedLog {
    pub sessions: Vec<Session>,
    pub errors: BTreeMap<usize, String>,
    /// Final shortcut table: the seed plus every definition line seen
    pub shortcuts: HashMap<String, String>,
    pub metadata: ParsingMetadata,
}
