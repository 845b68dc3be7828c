//! Error types for the Gridstat library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Gridstat operations.
#[derive(Debug, Error)]
pub enum GridstatError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Invalid caller input (column selection, hyperparameters, prediction input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Gridstat operations.
pub type Result<T> = std::result::Result<T, GridstatError>;
