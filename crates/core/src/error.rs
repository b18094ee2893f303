//! Error types for essayscore
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Scoring itself is total once a valid [`ScoreRange`](crate::ScoreRange)
//! exists; errors only arise while building inputs (ranges, records,
//! configuration) or reading them from disk.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for essayscore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for essayscore
#[derive(Debug, Error)]
pub enum Error {
    /// Score bounds are inverted or not finite
    #[error("Invalid score range: [{min}, {max}] (bounds must be finite and min <= max)")]
    InvalidRange {
        /// Lower bound supplied by the caller
        min: f64,
        /// Upper bound supplied by the caller
        max: f64,
    },

    /// A record field violates its limits
    #[error("Limit violation: {0}")]
    Limit(#[from] LimitError),

    /// Invalid input that is not a range or a field limit
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (reading configuration, question or essay files)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Build an `InvalidInput` error from anything displayable
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build a `Config` error from anything displayable
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_range() {
        let err = Error::InvalidRange {
            min: 90.0,
            max: 10.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid score range"));
        assert!(msg.contains("90"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_error_display_limit() {
        let err = Error::from(LimitError::EmptyField { field: "content" });
        let msg = err.to_string();
        assert!(msg.contains("Limit violation"));
        assert!(msg.contains("content"));
    }

    #[test]
    fn test_error_display_io() {
        let err = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::SerializationError(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_error_helpers() {
        assert!(matches!(
            Error::invalid_input("bad"),
            Error::InvalidInput(ref m) if m == "bad"
        ));
        assert!(matches!(
            Error::config("bad"),
            Error::Config(ref m) if m == "bad"
        ));
    }
}
