//! Error types for Defect Triage.
//!
//! The analysis pipeline itself never fails: lookup misses fall back to
//! the default dataset and degenerate inputs produce zeroed statistics.
//! Errors exist only at the ambient boundary: configuration loading,
//! inline dataset parsing, and I/O. They carry stable codes plus
//! remediation hints for both humans and automation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Defect Triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors (settings, schema).
    Config,
    /// Inline dataset input errors.
    Input,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Defect Triage.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid settings file: {0}")]
    InvalidSettings(String),

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    // Input errors (20-29)
    #[error("invalid observation input: {0}")]
    InvalidObservations(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Input errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidSettings(_) => 11,
            Error::SchemaValidation(_) => 12,
            Error::InvalidObservations(_) => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidSettings(_) | Error::SchemaValidation(_) => {
                ErrorCategory::Config
            }
            Error::InvalidObservations(_) => ErrorCategory::Input,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether this error is potentially recoverable by the user.
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Config errors: recoverable by fixing/resetting config
            Error::Config(_) => true,
            Error::InvalidSettings(_) => true,
            Error::SchemaValidation(_) => true,

            // Input: recoverable by fixing the dataset
            Error::InvalidObservations(_) => true,

            // I/O: often transient
            Error::Io(_) => true,
            Error::Json(_) => true,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Run 'dt-core check' to validate configuration, or check syntax in settings.json."
            }
            Error::InvalidSettings(_) => {
                "Run 'dt-core check --settings <path>' to validate, or delete the file to fall back to builtin defaults."
            }
            Error::SchemaValidation(_) => {
                "Ensure settings.json matches the expected schema version. See 'dt-core schema Settings'."
            }
            Error::InvalidObservations(_) => {
                "Observations must be a JSON array of {\"category\": string, \"count\": non-negative integer}."
            }
            Error::Io(_) => {
                "Check disk space, permissions, and that the file exists. Retry the operation."
            }
            Error::Json(_) => {
                "Invalid JSON in file. Check syntax with 'cat <file> | jq .' or restore from backup."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidSettings(_) => "Invalid Settings",
            Error::SchemaValidation(_) => "Schema Validation Failed",
            Error::InvalidObservations(_) => "Invalid Observations",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// Structured error response for JSON output.
///
/// Used by machine-facing output modes for parseable error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
