//! Command orchestration for CLI subcommands.

pub mod analyze;

pub use analyze::{execute_analyze, AnalyzeResult};

use thiserror::Error;

use crate::cli::CliError;
use crate::io::{AlertWriteError, LogReadError, SummaryWriteError};
use authwatch_fs::FsError;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("filesystem error: {0}")]
    Filesystem(#[from] FsError),

    #[error("input error: {0}")]
    Read(#[from] LogReadError),

    #[error("output error: {0}")]
    Output(#[from] AlertWriteError),

    #[error("summary error: {0}")]
    Summary(#[from] SummaryWriteError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
