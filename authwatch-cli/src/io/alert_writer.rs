//! Alert CSV writer.
//!
//! Serializes the finalized alert set as a CSV file. When the set is
//! empty no file is created at all: "no alerts" produces no artifact,
//! not a header-only file.

use std::path::{Path, PathBuf};

use authwatch_fs::{Filesystem, FsError};
use authwatch_schema::Alert;
use thiserror::Error;

/// Header row of the alert CSV.
pub const ALERT_CSV_HEADER: &str = "username,src_ip,fail_count,severity";

/// Errors from alert writing.
#[derive(Debug, Error)]
pub enum AlertWriteError {
    #[error("failed to create output directory: {0}")]
    CreateDir(#[source] FsError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: FsError,
    },
}

/// Writer for the alert CSV artifact.
pub struct AlertWriter<'a, F: Filesystem> {
    fs: &'a F,
    path: &'a Path,
}

impl<'a, F: Filesystem> AlertWriter<'a, F> {
    /// Create a new alert writer targeting `path`.
    pub fn new(fs: &'a F, path: &'a Path) -> Self {
        Self { fs, path }
    }

    /// Write the alert CSV atomically.
    ///
    /// Returns the written path, or `None` when `alerts` is empty and
    /// no file was created. The caller is expected to pass alerts in
    /// the detector's finalization order; rows are written as given.
    pub fn write(&self, alerts: &[Alert]) -> Result<Option<PathBuf>, AlertWriteError> {
        if alerts.is_empty() {
            return Ok(None);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs
                    .create_dir_all(parent)
                    .map_err(AlertWriteError::CreateDir)?;
            }
        }

        let csv = generate_alert_csv(alerts);
        self.fs
            .write_atomic(self.path, csv.as_bytes())
            .map_err(|e| AlertWriteError::Write {
                path: self.path.display().to_string(),
                source: e,
            })?;

        Ok(Some(self.path.to_path_buf()))
    }
}

/// Generate alert CSV content.
///
/// Format: `username,src_ip,fail_count,severity`, one row per alert.
pub fn generate_alert_csv(alerts: &[Alert]) -> String {
    let mut lines = Vec::with_capacity(alerts.len() + 1);

    lines.push(ALERT_CSV_HEADER.to_string());

    for alert in alerts {
        lines.push(format!(
            "{},{},{},{}",
            alert.username, alert.source_address, alert.fail_count, alert.severity,
        ));
    }

    lines.join("\n")
}
