//! Run summary writer.
//!
//! Optionally writes one JSON object per run with ingest and alert
//! totals, for monitoring pipelines that do not parse console output.

use std::path::Path;

use authwatch_fs::{Filesystem, FsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from summary writing.
#[derive(Debug, Error)]
pub enum SummaryWriteError {
    #[error("failed to write run summary: {0}")]
    Write(#[source] FsError),
}

/// Machine-readable totals for one analyze run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Events parsed from the auth log, regardless of status.
    pub events_total: u64,

    /// Events with FAILED status.
    pub failed_events: u64,

    /// Distinct (username, src_ip) keys with at least one failure.
    pub tracked_keys: u64,

    /// Alerts that met the threshold.
    pub alerts_emitted: u64,

    /// Threshold the run was configured with.
    pub threshold: u32,
}

impl RunSummary {
    /// Serialize to JSON.
    /// This cannot fail: the struct holds only integers.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("RunSummary serialization cannot fail")
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Write the run summary atomically.
pub fn write_summary<F: Filesystem>(
    fs: &F,
    path: &Path,
    summary: &RunSummary,
) -> Result<(), SummaryWriteError> {
    fs.write_atomic(path, summary.to_json().as_bytes())
        .map_err(SummaryWriteError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use authwatch_fs::MockFilesystem;

    fn summary() -> RunSummary {
        RunSummary {
            events_total: 7,
            failed_events: 6,
            tracked_keys: 2,
            alerts_emitted: 1,
            threshold: 5,
        }
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let s = summary();
        let json = s.to_json();
        assert!(json.contains("\"events_total\":7"));
        assert!(json.contains("\"threshold\":5"));
        assert_eq!(RunSummary::from_json(&json).expect("parse"), s);
    }

    #[test]
    fn test_write_summary_through_filesystem() {
        let fs = MockFilesystem::new();
        let path = Path::new("/out/run.json");

        write_summary(&fs, path, &summary()).expect("write");

        let content = fs.get_file_string(path).expect("file");
        assert_eq!(RunSummary::from_json(&content).expect("parse"), summary());
    }
}
