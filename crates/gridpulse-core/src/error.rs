//! Error types for the gridpulse dashboard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the gridpulse dashboard
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset file could not be found
    #[error("Dataset not found: {path}")]
    DatasetNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// No temporal column in the dataset header
    #[error("Temporal column missing: expected one of {expected}")]
    TemporalColumnMissing {
        /// Accepted column names, comma separated
        expected: String,
    },

    /// A temporal cell could not be parsed. Fatal: without a complete
    /// temporal axis the dashboard cannot order or filter rows.
    #[error("Row {row}: cannot parse {value:?} as a month")]
    InvalidMonth {
        /// Zero-based data row index
        row: usize,
        /// Offending cell contents
        value: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
