//! Authwatch CLI.
//!
//! Command-line front end for the failed-login detector: argument
//! parsing and validation, auth-log reading, alert CSV writing, and
//! console reporting.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod io;
pub mod logger;

pub use cli::{AnalyzeArgs, Cli, CliError, Command, DEFAULT_OUTPUT_PATH};
pub use commands::{execute_analyze, AnalyzeResult, CommandError, CommandResult};
pub use logger::{Logger, MockLogger, StderrLogger, Verbosity};
