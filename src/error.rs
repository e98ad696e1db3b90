//! Error types for colstat.

use std::path::PathBuf;

/// Result type alias for colstat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while profiling a delimited file.
///
/// Malformed numeric values are deliberately absent: a cell that fails to
/// parse as a float reclassifies its column as categorical instead of
/// producing an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Record-level error from the underlying CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding of a report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Input contains no columns.
    #[error("Input is empty")]
    EmptyInput,
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Error::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "data.csv",
        );
        let msg = err.to_string();
        assert!(msg.contains("data.csv"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::invalid_config("delimiter must be ASCII");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: delimiter must be ASCII"
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(Error::EmptyInput.to_string(), "Input is empty");
    }
}
