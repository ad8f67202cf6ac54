use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the log analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// A `--date` value could not be normalised into a calendar date.
    #[error("Invalid date: '{0}'. Expected a valid date with separators or no separators")]
    InvalidDate(String),

    /// A log file could not be opened or read to the end.
    ///
    /// The display form doubles as the per-file diagnostic printed during
    /// ingestion.
    #[error("Error caused with {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A log line could not be parsed as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
