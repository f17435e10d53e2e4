//! Domain error types
//!
//! This module defines the error hierarchy for Mascara. Errors are
//! domain-specific and don't expose third-party types: spreadsheet, CSV and
//! regex failures are flattened into messages at the boundary where they occur.

use thiserror::Error;

/// Main Mascara error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MascaraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Entity recognizer errors
    #[error("Recognizer error: {0}")]
    Recognizer(#[from] RecognizerError),

    /// Table reading/writing errors
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Pattern catalog errors (invalid regex, unknown label)
    #[error("Pattern catalog error: {0}")]
    Pattern(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Entity recognizer errors
///
/// A recognizer that cannot be initialized is fatal at startup; there is no
/// per-request recovery.
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// The recognizer could not be constructed
    #[error("Failed to initialize recognizer: {0}")]
    InitializationFailed(String),

    /// Gazetteer file missing
    #[error("Gazetteer not found: {0}")]
    GazetteerNotFound(String),

    /// Gazetteer file present but unreadable or malformed
    #[error("Invalid gazetteer: {0}")]
    InvalidGazetteer(String),

    /// The recognizer failed while analysing a text
    #[error("Failed to analyze text: {0}")]
    ProcessingFailed(String),
}

/// Table I/O errors
#[derive(Debug, Error)]
pub enum TableError {
    /// File extension is neither `.xlsx` nor `.csv`
    #[error("Unsupported file format: {0}. Please upload a .xlsx or .csv file")]
    UnsupportedFormat(String),

    /// Workbook contains no worksheet
    #[error("Workbook has no worksheets: {0}")]
    EmptyWorkbook(String),

    /// Failed to read or parse the source file
    #[error("Failed to read table: {0}")]
    ReadFailed(String),

    /// Failed to write the output workbook
    #[error("Failed to write table: {0}")]
    WriteFailed(String),

    /// Table exceeds spreadsheet limits
    #[error("Table too large for spreadsheet output: {0}")]
    TooLarge(String),
}

impl MascaraError {
    /// Whether this error stems from the input file rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MascaraError::Table(TableError::UnsupportedFormat(_))
                | MascaraError::Table(TableError::EmptyWorkbook(_))
                | MascaraError::Table(TableError::ReadFailed(_))
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for MascaraError {
    fn from(err: std::io::Error) -> Self {
        MascaraError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for MascaraError {
    fn from(err: serde_json::Error) -> Self {
        MascaraError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for MascaraError {
    fn from(err: toml::de::Error) -> Self {
        MascaraError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mascara_error_display() {
        let err = MascaraError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_recognizer_error_conversion() {
        let rec_err = RecognizerError::GazetteerNotFound("names.toml".to_string());
        let err: MascaraError = rec_err.into();
        assert!(matches!(err, MascaraError::Recognizer(_)));
        assert!(err.to_string().contains("names.toml"));
    }

    #[test]
    fn test_table_error_conversion() {
        let table_err = TableError::UnsupportedFormat("dados.pdf".to_string());
        let err: MascaraError = table_err.into();
        assert!(matches!(err, MascaraError::Table(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_write_failure_is_not_input_error() {
        let err: MascaraError = TableError::WriteFailed("disk full".to_string()).into();
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MascaraError = io_err.into();
        assert!(matches!(err, MascaraError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MascaraError = json_err.into();
        assert!(matches!(err, MascaraError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MascaraError = toml_err.into();
        assert!(matches!(err, MascaraError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_mascara_error_implements_std_error() {
        let err = MascaraError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
