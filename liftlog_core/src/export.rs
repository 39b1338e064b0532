//! CSV export of parsed sessions.
//!
//! Flattens every set of every lift into one spreadsheet row so external
//! tools can chart training load over time without reparsing the journal.

use crate::types::{Lift, Session, Set};
use crate::Result;
use std::io::Write;
use std::path::Path;

/// A row in the CSV output: one set, with its lift and session context
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    line: Option<usize>,
    shorthand: &'a str,
    modifiers: String,
    kind: &'static str,
    weight: String,
    reps: String,
    volume: f64,
}

impl<'a> CsvRow<'a> {
    fn new(session: &'a Session, lift: &'a Lift, set: &Set) -> Self {
        CsvRow {
            date: &session.date,
            line: lift.line,
            shorthand: &lift.shorthand,
            modifiers: lift
                .modifiers
                .as_deref()
                .map(|mods| mods.join("+"))
                .unwrap_or_default(),
            kind: set.kind(),
            weight: set.weight_text(),
            reps: set.reps_text(),
            volume: set.volume(),
        }
    }
}

/// Write all sets of all sessions as CSV rows, returning the row count
pub fn sessions_to_csv<W: Write>(sessions: &[Session], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut count = 0;
    for session in sessions {
        for lift in &session.lifts {
            for set in &lift.sets {
                csv_writer.serialize(CsvRow::new(session, lift, set))?;
                count += 1;
            }
        }
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export all sets of all sessions to a CSV file, returning the row count
pub fn export_csv(sessions: &[Session], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    let count = sessions_to_csv(sessions, file)?;

    tracing::info!("Wrote {} set rows to {:?}", count, path);
    Ok(count)
}
