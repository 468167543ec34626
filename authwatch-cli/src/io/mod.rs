//! I/O collaborators for the analyze command.
//!
//! The detector core consumes and produces in-memory values only; these
//! modules own the at-rest contracts around it:
//! - `log_reader` - delimited auth-log input
//! - `alert_writer` - alert CSV output
//! - `summary_writer` - machine-readable run summary

pub mod alert_writer;
pub mod log_reader;
pub mod summary_writer;

pub use alert_writer::{generate_alert_csv, AlertWriteError, AlertWriter, ALERT_CSV_HEADER};
pub use log_reader::{load_auth_log, parse_auth_log, LogReadError};
pub use summary_writer::{write_summary, RunSummary, SummaryWriteError};
