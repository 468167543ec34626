//! Detector configuration.

/// Default failure-count threshold for alert emission.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// Detector policy.
///
/// A single knob: the failure-count threshold. The high-severity cutoff
/// is always double the threshold; there is no independent high
/// parameter (the severity split is anchored to the same value that
/// gates emission).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Minimum failure count for a key to surface an alert.
    ///
    /// Callers are expected to supply a value >= 1. The detector applies
    /// any value mechanically: a threshold of 0 alerts on every tracked
    /// key, which is configuration misuse rather than a detector error.
    /// The CLI rejects 0 before it reaches this layer.
    pub threshold: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    /// Create a config with the given threshold.
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Builder: set the threshold.
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// The count at which an alert is classified high severity.
    pub fn high_cutoff(&self) -> u32 {
        self.threshold.saturating_mul(2)
    }
}
