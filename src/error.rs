//! Error types for the Hexapawn crate

use thiserror::Error;

/// Main error type for the Hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action {kind} at ({row}, {col}): {reason}")]
    InvalidAction {
        kind: String,
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("unsupported activation '{name}' (expected 'sigmoid' or 'relu')")]
    UnsupportedActivation { name: String },

    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("state must have exactly {expected} values, got {got} in '{context}'")]
    InvalidStateLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid cell value {value} at position {position} (must be -1, 0 or 1)")]
    InvalidCellValue { value: i64, position: usize },

    #[error("invalid player {value} (must be 0 or 1)")]
    InvalidPlayer { value: i64 },

    #[error("cannot parse state '{input}': {reason}")]
    ParseState { input: String, reason: String },

    #[error("invalid action kind '{input}'. Expected one of: {expected}")]
    InvalidActionKind { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
