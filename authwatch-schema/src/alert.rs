//! Alert and severity types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::TrackingKey;

/// Severity tier assigned to an emitted alert.
///
/// Two tiers only: keys below the alert threshold emit nothing, so there
/// is no "low" variant to represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    /// The lowercase label used in CSV output and console notices.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An alert surfaced for a tracking key whose failure count met the
/// configured threshold.
///
/// Immutable once constructed; exists only for the duration of the
/// output pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub username: String,
    pub source_address: String,
    pub fail_count: u32,
    pub severity: Severity,
}

impl Alert {
    /// Build an alert for a key at finalization time.
    pub fn new(key: &TrackingKey, fail_count: u32, severity: Severity) -> Self {
        Self {
            username: key.username.clone(),
            source_address: key.source_address.clone(),
            fail_count,
            severity,
        }
    }

    /// Serialize to a single JSON line.
    /// This cannot fail: the struct holds only strings and integers.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Alert serialization cannot fail")
    }
}
