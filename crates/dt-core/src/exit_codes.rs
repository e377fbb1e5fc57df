//! Exit codes for dt-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use dt_common::error::ErrorCategory;
use dt_common::Error;

/// Exit codes for dt-core operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: clean run
    Clean = 0,

    /// Invalid arguments or input data
    ArgsError = 10,

    /// Configuration invalid or unreadable
    ConfigError = 11,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Input => ExitCode::ArgsError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}
