use neodb_model::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or writing data files.
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV decoding or encoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON decoding or encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A required column is missing from the input.
    #[error("missing field '{field}'")]
    MissingField {
        /// Name of the missing column.
        field: String,
    },
    /// A data row failed validation in strict mode.
    #[error("malformed row {row}: {reason}")]
    Malformed {
        /// One-based data row number (header excluded).
        row: usize,
        /// Validation failure.
        #[source]
        reason: ValidationError,
    },
    /// Output path has no supported extension.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}
