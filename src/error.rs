use std::path::PathBuf;

use chrono::NaiveDate;

/// Errors produced while loading, validating, or preparing a board.
///
/// The layout computation itself is total for validated input; everything
/// that can go wrong is caught before the engine runs or while doing I/O.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("invalid viewport: start {start} is after end {end}")]
    InvalidViewport { start: NaiveDate, end: NaiveDate },

    #[error("task '{name}' ends before it starts ({end} < {start})")]
    InvalidTaskRange {
        name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("task '{name}' has priority {priority}, expected 1-5")]
    InvalidPriority { name: String, priority: u8 },

    #[error("column count must be at least 1")]
    InvalidColumnCount,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns (need name and start date), found headers: {found:?}")]
    CsvMissingColumns { found: Vec<String> },

    #[error("no valid tasks found in CSV ({skipped} rows skipped)")]
    CsvEmpty { skipped: usize },

    #[error("unsupported task file extension: {path}")]
    UnsupportedFormat { path: PathBuf },
}
