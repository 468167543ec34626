//! Auth log reader.
//!
//! Parses a comma-delimited auth log into `AuthEvent` records.
//! Format:
//! - First non-blank line is a header row
//! - Recognized columns: username, src_ip, status (any order;
//!   extra columns are ignored)
//! - Missing columns and short rows degrade to empty fields
//! - Blank lines are skipped

use std::path::Path;

use authwatch_fs::{Filesystem, FsError};
use authwatch_schema::AuthEvent;
use thiserror::Error;

/// Errors from auth log reading.
#[derive(Debug, Error)]
pub enum LogReadError {
    #[error("failed to read auth log: {0}")]
    Read(#[from] FsError),

    #[error("auth log has no header row")]
    EmptyFile,

    #[error("header has none of the expected columns (username, src_ip, status)")]
    MissingColumns,
}

/// Column positions resolved from the header row.
///
/// A column absent from the header reads as empty text on every row;
/// only a header with no recognized column at all is a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    username: Option<usize>,
    src_ip: Option<usize>,
    status: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<Self, LogReadError> {
        let mut map = Self {
            username: None,
            src_ip: None,
            status: None,
        };

        for (idx, name) in header.split(',').map(str::trim).enumerate() {
            match name.to_ascii_lowercase().as_str() {
                "username" => {
                    map.username.get_or_insert(idx);
                }
                "src_ip" => {
                    map.src_ip.get_or_insert(idx);
                }
                "status" => {
                    map.status.get_or_insert(idx);
                }
                _ => {}
            }
        }

        if map.username.is_none() && map.src_ip.is_none() && map.status.is_none() {
            return Err(LogReadError::MissingColumns);
        }

        Ok(map)
    }
}

/// Load and parse an auth log through the filesystem trait.
///
/// The whole file is read before any event is produced, so a read
/// failure aborts the run instead of feeding the detector a partial
/// stream.
pub fn load_auth_log<F: Filesystem>(fs: &F, path: &Path) -> Result<Vec<AuthEvent>, LogReadError> {
    let content = fs.read_file(path)?;
    parse_auth_log(&content)
}

/// Parse auth log content from a string.
///
/// This is the core parsing logic, separated for testability.
pub fn parse_auth_log(content: &str) -> Result<Vec<AuthEvent>, LogReadError> {
    let mut lines = content.lines();

    let header = loop {
        match lines.next() {
            None => return Err(LogReadError::EmptyFile),
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
        }
    };

    let columns = ColumnMap::from_header(header)?;

    let mut events = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        events.push(AuthEvent::new(
            field_at(&fields, columns.username),
            field_at(&fields, columns.src_ip),
            field_at(&fields, columns.status),
        ));
    }

    Ok(events)
}

/// Field at a resolved column position, or empty text when the column
/// is unmapped or the row is too short.
fn field_at<'a>(fields: &[&'a str], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| fields.get(i).copied()).unwrap_or("")
}
