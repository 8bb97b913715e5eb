//! CLI exit code handling
//!
//! Exit codes:
//! - 0: Success
//! - 1: Invalid input (user can fix a field)
//! - 2: Numeric failure (start height below the ending height, or overflow)
//! - 3: Configuration or IO failure

use std::process::ExitCode;

use bungee_core::ValidationError;

/// Exit codes for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Calculation succeeded
    Success = 0,
    /// A field failed validation
    InvalidInput = 1,
    /// Stretch distance had no real solution, or a quantity overflowed
    DomainError = 2,
    /// Constants file unreadable or rejected, or IO failed
    Config = 3,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Map a calculation error to its exit code
pub fn exit_code_for_error(err: &ValidationError) -> CliExitCode {
    match err {
        ValidationError::InvalidInput { .. } => CliExitCode::InvalidInput,
        ValidationError::NumericDomainError { .. } | ValidationError::Overflow { .. } => {
            CliExitCode::DomainError
        }
    }
}
