//! Integration tests for the liftlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Parsing a journal file into the session summary and JSON dump
//! - Per-line error reporting on stderr
//! - History and previous-occurrence lookup
//! - CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftlog"))
}

/// Helper to write a journal file into a fresh temp dir
fn write_journal(text: &str) -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("journal.txt");
    fs::write(&path, text).expect("Failed to write journal");
    (temp_dir, path)
}

const SAMPLE: &str = "\
# training journal
BBP = BP#B
2024-01-01
45'
BBP 100 8,8,6
SQ 140 5

2024-01-05
BBP 102.5 8
";

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plain-text workout journal parser"));
}

#[test]
fn test_parse_prints_session_summary() {
    let (_dir, journal) = write_journal(SAMPLE);

    cli()
        .arg("parse")
        .arg(&journal)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-01-05"))
        .stdout(predicate::str::contains("2 session(s)"));
}

#[test]
fn test_parse_json_dump_is_valid() {
    let (_dir, journal) = write_journal(SAMPLE);

    let output = cli()
        .arg("parse")
        .arg(&journal)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let sessions = parsed["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["date"], "2024-01-01");
    assert_eq!(sessions[0]["duration"], 45);
    // The shortcut expanded before the lift was recorded.
    assert_eq!(sessions[0]["lifts"][0]["shorthand"], "BP");
}

#[test]
fn test_parse_reports_bad_lines_on_stderr() {
    let (_dir, journal) = write_journal("2024-01-01\nBP abc\nSQ 140 5\n");

    cli()
        .arg("parse")
        .arg(&journal)
        .assert()
        .success()
        .stderr(predicate::str::contains("line 2: Invalid Weight : abc"));
}

#[test]
fn test_history_finds_previous_occurrence() {
    let (_dir, journal) = write_journal(SAMPLE);

    cli()
        .arg("history")
        .arg(&journal)
        .arg("BP")
        .arg("--before")
        .arg("2024-01-05")
        .assert()
        .success()
        .stdout(predicate::str::contains("Previous before 2024-01-05: 2024-01-01"));
}

#[test]
fn test_history_unknown_shorthand() {
    let (_dir, journal) = write_journal(SAMPLE);

    cli()
        .arg("history")
        .arg(&journal)
        .arg("DL")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded lifts for DL"));
}

#[test]
fn test_export_writes_csv() {
    let (dir, journal) = write_journal(SAMPLE);
    let out = dir.path().join("sets.csv");

    cli()
        .arg("export")
        .arg(&journal)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("set row(s)"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("date,line,shorthand,modifiers,kind,weight,reps,volume"));
    assert!(csv.contains("2024-01-01,5,BP,B,single,100,8,800.0"));
}

#[test]
fn test_custom_config_seed() {
    let (dir, journal) = write_journal("2024-01-01\nFS 80 5\n");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[shortcuts]\nFS = \"FrontSquat#B\"\n").unwrap();

    let output = cli()
        .arg("parse")
        .arg(&journal)
        .arg("--json")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["sessions"][0]["lifts"][0]["shorthand"], "FrontSquat");
}

#[test]
fn test_missing_file_fails() {
    cli()
        .arg("parse")
        .arg("no/such/journal.txt")
        .assert()
        .failure();
}
