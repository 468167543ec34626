//! Console reporting for authwatch.
//!
//! Trait-based logging so command tests can capture notices
//! deterministically instead of scraping stderr. Informational only:
//! nothing here feeds back into the detector.

use std::io::Write;
use std::sync::{Arc, RwLock};

/// Verbosity level for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Normal output (always shown)
    Normal,
    /// Verbose output (-v flag)
    Verbose,
    /// Debug output (-vv flag)
    Debug,
}

impl Verbosity {
    /// Create verbosity from CLI flag count.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Trait for console output.
pub trait Logger: Send + Sync {
    /// Log a message at the given verbosity level.
    fn log(&self, level: Verbosity, message: &str);

    /// Log at normal level (always visible).
    fn info(&self, message: &str) {
        self.log(Verbosity::Normal, message);
    }

    /// Log at verbose level (requires -v).
    fn verbose(&self, message: &str) {
        self.log(Verbosity::Verbose, message);
    }

    /// Log at debug level (requires -vv).
    fn debug(&self, message: &str) {
        self.log(Verbosity::Debug, message);
    }
}

/// Logger that writes to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: Verbosity,
}

impl StderrLogger {
    /// Create a new stderr logger with the given verbosity level.
    pub fn new(level: Verbosity) -> Self {
        Self { level }
    }
}

impl Logger for StderrLogger {
    fn log(&self, level: Verbosity, message: &str) {
        if level <= self.level {
            let _ = writeln!(std::io::stderr(), "{}", message);
        }
    }
}

/// A captured log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: Verbosity,
    pub message: String,
}

/// Mock logger for testing that records every message it is shown.
#[derive(Debug, Clone)]
pub struct MockLogger {
    level: Verbosity,
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl MockLogger {
    /// Create a new mock logger with the given verbosity level.
    pub fn new(level: Verbosity) -> Self {
        Self {
            level,
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock logger that captures all levels.
    pub fn capture_all() -> Self {
        Self::new(Verbosity::Debug)
    }

    /// Get all captured log entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().unwrap().clone()
    }

    /// Get captured messages at a specific level.
    pub fn messages_at(&self, level: Verbosity) -> Vec<String> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Check whether any captured message contains the given text.
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .read()
            .unwrap()
            .iter()
            .any(|e| e.message.contains(text))
    }
}

impl Logger for MockLogger {
    fn log(&self, level: Verbosity, message: &str) {
        if level <= self.level {
            self.entries.write().unwrap().push(LogEntry {
                level,
                message: message.to_string(),
            });
        }
    }
}
