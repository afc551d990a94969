//! Unified error types for the conversion service.

use thiserror::Error;

/// Unified error type for the conversion service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Conversion failures. Every variant is a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The input format tag is not one of `dec`, `bin`, `hex`.
    #[error("Invalid input format: {0}")]
    InvalidInputFormat(String),

    /// The output format tag is not one of `dec`, `bin`, `hex`.
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    /// The value is not a numeral in the requested radix.
    #[error("Invalid input value: {value} is not a valid {format} numeral")]
    ParseError {
        /// The rejected value, verbatim.
        value: String,
        /// The format tag the value was parsed against.
        format: String,
    },
}

impl ConvertError {
    /// Stable short label, used for metric labels and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::InvalidInputFormat(_) => "invalid_input_format",
            ConvertError::InvalidOutputFormat(_) => "invalid_output_format",
            ConvertError::ParseError { .. } => "parse_error",
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
