//! Analyze command orchestration.
//!
//! Reads the auth log, feeds the failure tracker, and writes the alert
//! artifacts. The detector itself never touches I/O; everything fallible
//! lives here.

use std::path::PathBuf;

use authwatch_detector::{DetectorConfig, FailureTracker};
use authwatch_fs::Filesystem;

use crate::cli::AnalyzeArgs;
use crate::io::{load_auth_log, write_summary, AlertWriter, RunSummary};
use crate::logger::Logger;

use super::CommandResult;

/// Result of analyze command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeResult {
    /// Events parsed from the auth log.
    pub events_total: usize,

    /// FAILED events counted across all keys.
    pub failed_events: u64,

    /// Distinct keys with at least one failure.
    pub tracked_keys: usize,

    /// Alerts that met the threshold.
    pub alerts_emitted: usize,

    /// Path of the written alert CSV, or `None` when there were no
    /// alerts and no file was created.
    pub output_path: Option<PathBuf>,
}

/// Execute the analyze command.
///
/// This is the main entry point for the analyze subcommand.
pub fn execute_analyze<F, L>(args: &AnalyzeArgs, fs: &F, logger: &L) -> CommandResult<AnalyzeResult>
where
    F: Filesystem,
    L: Logger,
{
    args.validate()?;

    // The reader materializes the whole file up front: an unreadable
    // input aborts here, never after partial ingestion.
    let events = load_auth_log(fs, &args.input)?;
    logger.verbose(&format!(
        "parsed {} event(s) from {}",
        events.len(),
        args.input.display()
    ));

    let mut tracker = FailureTracker::new(DetectorConfig::new(args.threshold));
    for event in &events {
        logger.debug(&format!(
            "event user={:?} src={:?} status={:?}",
            event.username, event.source_address, event.status
        ));
        tracker.record(event);
    }
    logger.verbose(&format!(
        "{} failure(s) across {} tracked key(s)",
        tracker.total_failures(),
        tracker.tracked_keys()
    ));

    let alerts = tracker.finalize();
    for alert in &alerts {
        logger.info(&format!(
            "[{}] {} failed login(s) for '{}' from {}",
            alert.severity, alert.fail_count, alert.username, alert.source_address
        ));
    }

    let writer = AlertWriter::new(fs, &args.output);
    let output_path = writer.write(&alerts)?;

    if let Some(ref summary_path) = args.summary {
        let summary = RunSummary {
            events_total: events.len() as u64,
            failed_events: tracker.total_failures(),
            tracked_keys: tracker.tracked_keys() as u64,
            alerts_emitted: alerts.len() as u64,
            threshold: args.threshold,
        };
        write_summary(fs, summary_path, &summary)?;
    }

    Ok(AnalyzeResult {
        events_total: events.len(),
        failed_events: tracker.total_failures(),
        tracked_keys: tracker.tracked_keys(),
        alerts_emitted: alerts.len(),
        output_path,
    })
}
