#![forbid(unsafe_code)]

//! Core parsing engine and lift-history index for the Liftlog system.
//!
//! This crate provides:
//! - Domain types (logs, sessions, lifts, typed sets)
//! - The weight/rep grammar and single-line lift parser
//! - The log parser (sessions, per-line errors, shortcut table, metadata)
//! - The lift history cache queried by front ends and analytics
//! - Configuration, logging and CSV export support

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod grammar;
pub mod lift;
pub mod parser;
pub mod cache;
pub mod export;

// Re-export commonly used items
pub use cache::LiftCache;
pub use config::Config;
pub use error::{Error, ParseError, Result};
pub use export::{export_csv, sessions_to_csv};
pub use grammar::parse_sets;
pub use lift::parse_lift;
pub use parser::parse_log;
pub use types::*;
