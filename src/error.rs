//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! Note that classification itself never errors: unparseable chat timestamps
//! become `None`, unparseable date mentions render as `"no date"`, and lines
//! that match no supported format are dropped. The variants here cover I/O and
//! serialization only.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The requested format or output target is invalid.
    ///
    /// This occurs when:
    /// - An output path has an unknown file extension
    /// - A format requires a feature that is not enabled
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when converting buffered output back into a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsiftError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatsiftError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatsiftError::InvalidFormat {
            format: "output",
            message: "unknown extension".into(),
        };
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains("unknown extension"));
    }

    #[test]
    fn test_utf8_error_display() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err = ChatsiftError::Utf8 {
            context: "CSV output".into(),
            source: utf8_err,
        };
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("CSV output"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatsiftError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatsiftError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_format());

        let fmt_err = ChatsiftError::invalid_format("output", "bad");
        assert!(fmt_err.is_invalid_format());
        assert!(!fmt_err.is_io());
    }

    #[test]
    fn test_from_utf8_error() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: ChatsiftError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatsiftError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatsiftError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatsiftError::invalid_format("output", "bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidFormat"));
    }
}
