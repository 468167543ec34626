//! CLI argument parsing for authwatch.
//!
//! Provides the command-line interface for the `authwatch` binary with
//! the analyze subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use authwatch_detector::DEFAULT_THRESHOLD;

/// Default path for the alert CSV, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "alerts.csv";

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("threshold must be at least 1, got {0}")]
    InvalidThreshold(u32),
}

/// Authwatch - failed-login aggregation and alerting for auth logs.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "authwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Analyze an auth log and emit threshold-breach alerts.
    Analyze(AnalyzeArgs),
}

/// Arguments for the analyze command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeArgs {
    /// Path to the delimited auth log (header row with username,
    /// src_ip, status columns in any order).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the alert CSV. Not created when no key breaches the
    /// threshold.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Failure-count threshold for alert emission. Counts at or above
    /// double this value classify as high severity.
    #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u32,

    /// Optional path for a machine-readable run summary (JSON).
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Increase verbosity (-v verbose, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl AnalyzeArgs {
    /// Validate the arguments.
    ///
    /// A threshold of 0 would alert on every tracked key; the detector
    /// would apply it mechanically, so it is rejected here instead.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.threshold == 0 {
            return Err(CliError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
