//! Error handling module for MediaProbe

use std::time::Duration;

use thiserror::Error;

/// Main error type for probe operations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Input file not found or not a regular file
    #[error("File {path} does not exist.")]
    FileNotFound { path: String },

    /// The probing executable could not be started
    #[error("Error running {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the child's output or waiting on it failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The child did not exit before the configured deadline
    #[error("ffprobe timed out after {limit:?}")]
    Timeout { limit: Duration },

    /// Captured output is not valid JSON
    #[error("Error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Captured output parsed to a JSON `null`
    #[error("Error parsing JSON: document root is null")]
    NullDocument,

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl ProbeError {
    /// Whether a probe can degrade to an empty result instead of failing.
    ///
    /// Only the missing-input precondition and configuration problems are
    /// surfaced to callers; everything else collapses into an empty aggregate.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ProbeError::FileNotFound { .. } | ProbeError::Config { .. })
    }
}

/// Result type alias for probe operations
pub type ProbeOutcome<T> = std::result::Result<T, ProbeError>;
