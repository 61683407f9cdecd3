//! Structured error handling and exit codes.

use serde::Serialize;

use crate::config::ConfigError;
use crate::input::InputError;

/// Exit codes for the HashDupe application.
///
/// - 0: Success (report written)
/// - 1: General error (I/O failure opening input or writing the report)
/// - 2: Configuration error (missing input path, bad config file)
/// - 3: Parse error (input could not be decoded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: The report was written.
    Success = 0,
    /// General error: An I/O or unexpected failure.
    GeneralError = 1,
    /// Configuration error: Required settings missing or invalid.
    ConfigError = 2,
    /// Parse error: The input list could not be decoded.
    ParseError = 3,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "HD000",
            Self::GeneralError => "HD001",
            Self::ConfigError => "HD002",
            Self::ParseError => "HD003",
        }
    }

    /// Pick the exit code for an error returned by `run_app`.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<ConfigError>().is_some() {
            Self::ConfigError
        } else if err
            .downcast_ref::<InputError>()
            .is_some_and(InputError::is_parse)
        {
            Self::ParseError
        } else {
            Self::GeneralError
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "HD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: format!("{err:#}"),
        }
    }
}
