//! Error type definitions for the M3U Scanner application

use std::path::Path;

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all fatal errors that can occur during a run. It
/// uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output stream errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// Output stream specific errors
///
/// Failure to open or write either output file aborts the whole run; the
/// scan is idempotent and safely rerunnable, so no partial-result recovery
/// is attempted.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Output file could not be created
    #[error("Failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error with a custom message
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl OutputError {
    /// Create an error for a failed file open
    pub fn create<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Create {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create an error for a failed file write
    pub fn write<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
