//! Error types for the liftlog_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Closed taxonomy of line-level parse failures.
///
/// The grammar layers fail fast with the first fatal condition in a line;
/// the log parser records the `Display` form in its per-line error map and
/// keeps scanning. The standalone line parser surfaces these directly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Line does not start with a usable exercise shorthand
    #[error("Invalid Shorthand : {0}")]
    InvalidShorthand(String),

    /// A weight token is not a signed decimal number
    #[error("Invalid Weight : {0}")]
    InvalidWeight(String),

    /// A rep token is unrecognized or inconsistent with its weight group
    #[error("Invalid Rep : {0}")]
    InvalidRep(String),
}

/// Core error type for liftlog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lift line failed to parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
