//! Error types for setup verification.
//!
//! This module defines [`VerifyError`], the error type used for
//! configuration and I/O failures, and [`ProbeError`], the failure of a
//! single bounded subprocess.
//!
//! # Error Handling Strategy
//!
//! - Probes never propagate errors: a [`ProbeError`] is folded into a
//!   [`ProbeOutcome`](crate::probe::ProbeOutcome) at the probe boundary
//! - `VerifyError` covers configuration loading and report output
//! - The binary adds context with `anyhow` before logging a failure
//! - Neither kind changes the process exit code

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for verification operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Failure of a single time-bounded child process.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The executable does not exist on PATH.
    #[error("'{program}' not found")]
    NotFound { program: String },

    /// The process did not finish before the deadline and was killed.
    #[error("'{program}' did not finish within {}s", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    /// The process could not be started.
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the running process failed.
    #[error("Failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
