//! Core error types for healthlog-core.
//!
//! This module defines the error hierarchy using thiserror. Each subsystem
//! has its own enum; `CoreError` is the umbrella the CLI reports from.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for healthlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Record-store errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Record construction errors
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Chart rendering errors
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Record-store errors.
///
/// `Unreadable` covers every way a load can fail: missing file, header that
/// does not match the fixed schema, or a row that does not parse.
/// `WriteFailure` covers every way the whole-file rewrite can fail.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file is missing or its contents do not parse
    #[error("health log at {path} is unreadable: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    /// The backing file could not be written
    #[error("failed to write health log at {path}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Record construction errors.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A raw text field did not parse as a number
    #[error("invalid value for '{field}': '{value}' is not a number")]
    InvalidField { field: &'static str, value: String },
}

/// Chart rendering errors.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Nothing to plot; a normal user-visible state, not a fault
    #[error("no records to plot")]
    NoData,

    /// The plotting backend failed
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
