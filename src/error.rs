//! Error types for startcheck operations.
//!
//! This module defines [`StartcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Loading the checklist data file never produces an error; a missing or
//!   malformed file yields an empty store
//! - Saving surfaces I/O failures so the form host can show a notice
//! - Use `anyhow::Error` (via `StartcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for startcheck operations.
#[derive(Debug, Error)]
pub enum StartcheckError {
    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Field key is not part of the checklist.
    #[error("Unknown checklist field: {key}")]
    UnknownField { key: String },

    /// Value given for a checkbox could not be read as checked/unchecked.
    #[error("Invalid value '{value}' for checkbox '{key}' (expected true/false)")]
    InvalidCheckboxValue { key: String, value: String },

    /// Section number outside the checklist.
    #[error("Unknown section: {number}")]
    UnknownSection { number: usize },

    /// Writing the checklist data file failed.
    #[error("Failed to save checklist data to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Prompt could not be answered (e.g. non-interactive with no default).
    #[error("Cannot prompt for '{key}': {message}")]
    PromptUnavailable { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for startcheck operations.
pub type Result<T> = std::result::Result<T, StartcheckError>;
