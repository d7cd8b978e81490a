//! Error types for the data-loader crate.
//!
//! Row-level problems inside a CSV document never surface here: the parser
//! degrades malformed fields to their defaults. These errors cover the
//! edges where text enters the crate (raw bytes and files on disk).

use thiserror::Error;

/// Errors that can occur while reading CSV input
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` based on the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Input could not be treated as CSV text
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// File name / MIME type does not look like a CSV attachment
    #[error("Unsupported file {name}: expected a .csv file")]
    UnsupportedFile { name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
