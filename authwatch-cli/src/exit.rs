//! Exit codes for the authwatch CLI.
//!
//! Following Unix conventions for exit codes.

use crate::commands::CommandError;
use crate::io::LogReadError;

/// Exit code constants.
pub mod codes {
    /// Successful execution (including "no alerts").
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments.
    pub const INVALID_ARGS: i32 = 1;
    /// IO error.
    pub const IO_ERROR: i32 = 2;
    /// Input format error (unusable auth log).
    pub const FORMAT_ERROR: i32 = 3;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Filesystem(_) => codes::IO_ERROR,
        CommandError::Read(LogReadError::Read(_)) => codes::IO_ERROR,
        CommandError::Read(_) => codes::FORMAT_ERROR,
        CommandError::Output(_) => codes::IO_ERROR,
        CommandError::Summary(_) => codes::IO_ERROR,
    }
}
