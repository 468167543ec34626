//! Authwatch CLI binary.
//!
//! Entry point for the `authwatch` command-line tool.

use std::process::ExitCode;

use clap::Parser;

use authwatch_cli::exit::{codes, exit_code};
use authwatch_cli::logger::{StderrLogger, Verbosity};
use authwatch_cli::{execute_analyze, AnalyzeArgs, Cli, Command};
use authwatch_fs::RealFilesystem;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => run_analyze(args),
    }
}

/// Run the analyze command.
fn run_analyze(args: AnalyzeArgs) -> ExitCode {
    let logger = StderrLogger::new(Verbosity::from_count(args.verbose));
    let fs = RealFilesystem;

    match execute_analyze(&args, &fs, &logger) {
        Ok(result) => {
            match &result.output_path {
                Some(path) => {
                    println!("{} alert(s) written to {}", result.alerts_emitted, path.display());
                }
                None => {
                    println!(
                        "No alerts: no key reached {} failed login(s) \
                         ({} event(s) scanned)",
                        args.threshold, result.events_total
                    );
                }
            }
            ExitCode::from(codes::SUCCESS as u8)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}
