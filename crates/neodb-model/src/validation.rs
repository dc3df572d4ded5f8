use thiserror::Error;

/// Validation errors for model fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace only.
    #[error("{field} must not be empty")]
    Empty {
        /// Field name that failed validation.
        field: &'static str,
    },
    /// A timestamp did not match the expected format.
    #[error("timestamp ('{value}') does not match format {format}")]
    Timestamp {
        /// Offending value.
        value: String,
        /// Expected `chrono` format string.
        format: &'static str,
    },
    /// A numeric field could not be parsed into a finite number.
    #[error("{field} ('{value}') is not a finite number")]
    Number {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A field of a text row was not valid UTF-8.
    #[error("column {column} is not valid UTF-8")]
    Encoding {
        /// Zero-based column index of the offending field.
        column: usize,
    },
    /// A row did not have the expected structure.
    #[error("row is not {expected}")]
    Shape {
        /// Description of the expected structure.
        expected: &'static str,
    },
}

/// Parses a required, finite floating-point field.
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ValidationError::Number {
            field,
            value: value.to_string(),
        }),
    }
}
