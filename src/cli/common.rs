//! Shared CLI types: errors, exit codes and output helpers.

use serde::Serialize;
use std::fmt;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// File could not be read, written or parsed
    IoError = 1,
    /// Input was readable but rejected
    ValidationError = 2,
}

impl ExitCode {
    /// Numeric code passed to the OS.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// I/O or parse failure
    Io,
    /// Validation failure
    Validation,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// I/O or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io => ExitCode::IoError,
            CliErrorKind::Validation => ExitCode::ValidationError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
