//! Error types for the export library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration error (invalid YAML, missing fields, bad identifiers, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A column was declared with a type the Access engine does not support.
    #[error("Provided data type not found: {0}")]
    DataTypeNotFound(String),

    /// An in-memory table row does not match the table's column count.
    #[error("Row {row} has {found} values but the table has {expected} columns")]
    InvalidRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A new, empty database file could not be created.
    #[error("Failed to create database {}: {message}", path.display())]
    DatabaseCreation { path: PathBuf, message: String },

    /// Error reported by the ODBC driver manager or the Access driver.
    #[cfg(feature = "odbc")]
    #[error("ODBC error: {0}")]
    Odbc(#[from] odbc_api::Error),

    /// IO error (staging files, descriptor, temporary directories)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing a delimited staging file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exit code for configuration errors.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for unsupported column types.
pub const EXIT_TYPE_ERROR: u8 = 2;
/// Exit code for driver failures.
pub const EXIT_DRIVER_ERROR: u8 = 3;
/// Exit code for database file creation failures.
pub const EXIT_CREATE_ERROR: u8 = 4;
/// Exit code for malformed input data.
pub const EXIT_DATA_ERROR: u8 = 5;
/// Exit code for filesystem errors.
pub const EXIT_IO_ERROR: u8 = 7;

impl ExportError {
    /// Create a DatabaseCreation error
    pub fn creation(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ExportError::DatabaseCreation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::Config(_) | ExportError::Yaml(_) => EXIT_CONFIG_ERROR,
            ExportError::DataTypeNotFound(_) => EXIT_TYPE_ERROR,
            #[cfg(feature = "odbc")]
            ExportError::Odbc(_) => EXIT_DRIVER_ERROR,
            ExportError::DatabaseCreation { .. } => EXIT_CREATE_ERROR,
            ExportError::InvalidRow { .. } | ExportError::Csv(_) | ExportError::Json(_) => {
                EXIT_DATA_ERROR
            }
            ExportError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
