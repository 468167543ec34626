//! Failure tracking and alert finalization.

use std::collections::HashMap;

use authwatch_schema::{Alert, AuthEvent, Severity, TrackingKey};

use crate::config::DetectorConfig;

/// Status value that counts toward failure totals (compared
/// case-insensitively).
const FAILED_STATUS: &str = "FAILED";

/// Per-key failure counter with a two-phase lifecycle.
///
/// Phase one: `record` is called once per event, any number of times, in
/// any order. Phase two: `finalize` walks the accumulated counts once
/// and derives alerts. `finalize` does not mutate state, so calling it
/// more than once yields identical results.
///
/// Invariant: a key's count equals the number of events recorded so far
/// for that key with status `FAILED` (case-insensitive). Event order
/// never affects final counts.
#[derive(Debug, Default)]
pub struct FailureTracker {
    config: DetectorConfig,
    counts: HashMap<TrackingKey, u32>,
}

impl FailureTracker {
    /// Create an empty tracker with the given policy.
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            counts: HashMap::new(),
        }
    }

    /// The policy this tracker applies at finalization.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Record one authentication event.
    ///
    /// Increments the counter for `(username, source_address)` by
    /// exactly 1 when the status is `FAILED` (case-insensitive); any
    /// other status, including empty, leaves every counter unchanged.
    /// Never fails: malformed events degrade to empty key components
    /// upstream, and empty components are valid key material.
    pub fn record(&mut self, event: &AuthEvent) {
        if !event.status.eq_ignore_ascii_case(FAILED_STATUS) {
            return;
        }
        *self.counts.entry(event.key()).or_insert(0) += 1;
    }

    /// Number of distinct keys with at least one recorded failure.
    pub fn tracked_keys(&self) -> usize {
        self.counts.len()
    }

    /// Current failure count for a key. Absent keys read as zero.
    pub fn failure_count(&self, key: &TrackingKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Total failures recorded across all keys.
    pub fn total_failures(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Derive alerts from the accumulated counts.
    ///
    /// One alert per key whose count reached the threshold
    /// (`count == threshold` emits); keys below it are discarded
    /// silently, which is a normal outcome rather than a failure.
    /// Alerts are emitted in lexicographic key order (username, then
    /// source address) so that output is reproducible run-to-run.
    pub fn finalize(&self) -> Vec<Alert> {
        let mut breaches: Vec<(&TrackingKey, u32)> = self
            .counts
            .iter()
            .filter(|(_, &count)| count >= self.config.threshold)
            .map(|(key, &count)| (key, count))
            .collect();

        // HashMap iteration order is arbitrary; sort for determinism.
        breaches.sort_by(|a, b| a.0.cmp(b.0));

        breaches
            .into_iter()
            .map(|(key, count)| Alert::new(key, count, classify(count, self.config.threshold)))
            .collect()
    }
}

/// Classify a surfaced count against the threshold.
///
/// High when the count reaches double the threshold, medium otherwise.
/// Plain integer comparison: `count == 2 * threshold` is high,
/// `count == 2 * threshold - 1` is medium.
pub fn classify(count: u32, threshold: u32) -> Severity {
    if count >= threshold.saturating_mul(2) {
        Severity::High
    } else {
        Severity::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(username: &str, address: &str) -> AuthEvent {
        AuthEvent::new(username, address, "FAILED")
    }

    fn tracker(threshold: u32) -> FailureTracker {
        FailureTracker::new(DetectorConfig::new(threshold))
    }

    // ===========================================
    // Counting
    // ===========================================

    #[test]
    fn test_count_matches_failed_events_per_key() {
        let mut t = tracker(5);
        for _ in 0..3 {
            t.record(&failed("alice", "10.0.0.5"));
        }
        t.record(&failed("alice", "10.0.0.6"));

        assert_eq!(t.failure_count(&TrackingKey::new("alice", "10.0.0.5")), 3);
        assert_eq!(t.failure_count(&TrackingKey::new("alice", "10.0.0.6")), 1);
        assert_eq!(t.tracked_keys(), 2);
        assert_eq!(t.total_failures(), 4);
    }

    #[test]
    fn test_absent_key_reads_zero() {
        let t = tracker(5);
        assert_eq!(t.failure_count(&TrackingKey::new("nobody", "1.2.3.4")), 0);
    }

    #[test]
    fn test_success_does_not_disturb_counts() {
        let mut t = tracker(5);
        for _ in 0..3 {
            t.record(&failed("alice", "10.0.0.5"));
        }
        t.record(&AuthEvent::new("alice", "10.0.0.5", "SUCCESS"));

        assert_eq!(t.failure_count(&TrackingKey::new("alice", "10.0.0.5")), 3);
    }

    #[test]
    fn test_unknown_and_empty_statuses_ignored() {
        let mut t = tracker(5);
        t.record(&AuthEvent::new("alice", "10.0.0.5", "LOCKED"));
        t.record(&AuthEvent::new("alice", "10.0.0.5", ""));
        assert_eq!(t.tracked_keys(), 0);
    }

    #[test]
    fn test_status_comparison_is_case_insensitive() {
        let mut t = tracker(5);
        t.record(&AuthEvent::new("bob", "10.1.1.1", "failed"));
        t.record(&AuthEvent::new("bob", "10.1.1.1", "Failed"));
        t.record(&AuthEvent::new("bob", "10.1.1.1", "FAILED"));
        assert_eq!(t.failure_count(&TrackingKey::new("bob", "10.1.1.1")), 3);
    }

    #[test]
    fn test_empty_key_components_are_tracked() {
        let mut t = tracker(1);
        t.record(&AuthEvent::new("", "", "FAILED"));
        assert_eq!(t.failure_count(&TrackingKey::new("", "")), 1);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let mut events = vec![
            failed("alice", "10.0.0.5"),
            AuthEvent::new("alice", "10.0.0.5", "SUCCESS"),
            failed("carol", "172.16.0.3"),
            failed("alice", "10.0.0.5"),
            failed("carol", "172.16.0.3"),
            failed("dave", "9.9.9.9"),
        ];

        let mut forward = tracker(1);
        for e in &events {
            forward.record(e);
        }

        events.reverse();
        let mut reversed = tracker(1);
        for e in &events {
            reversed.record(e);
        }

        assert_eq!(forward.finalize(), reversed.finalize());
        assert_eq!(forward.total_failures(), reversed.total_failures());
    }

    // ===========================================
    // Finalization and severity
    // ===========================================

    #[test]
    fn test_alert_emitted_at_exact_threshold() {
        let mut t = tracker(5);
        for _ in 0..5 {
            t.record(&failed("carol", "172.16.0.3"));
        }

        let alerts = t.finalize();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].fail_count, 5);
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_no_alert_below_threshold() {
        let mut t = tracker(5);
        for _ in 0..4 {
            t.record(&failed("carol", "172.16.0.3"));
        }
        assert!(t.finalize().is_empty());
    }

    #[test]
    fn test_severity_boundary_at_double_threshold() {
        assert_eq!(classify(10, 5), Severity::High);
        assert_eq!(classify(9, 5), Severity::Medium);
        assert_eq!(classify(11, 5), Severity::High);
        assert_eq!(classify(5, 5), Severity::Medium);
    }

    #[test]
    fn test_empty_input_produces_no_alerts() {
        assert!(tracker(5).finalize().is_empty());
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut t = tracker(2);
        for _ in 0..4 {
            t.record(&failed("bob", "10.1.1.1"));
        }
        assert_eq!(t.finalize(), t.finalize());
    }

    #[test]
    fn test_alerts_sorted_by_username_then_address() {
        let mut t = tracker(1);
        t.record(&failed("bob", "10.0.0.2"));
        t.record(&failed("alice", "10.0.0.9"));
        t.record(&failed("alice", "10.0.0.1"));

        let alerts = t.finalize();
        let keys: Vec<(&str, &str)> = alerts
            .iter()
            .map(|a| (a.username.as_str(), a.source_address.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("alice", "10.0.0.1"),
                ("alice", "10.0.0.9"),
                ("bob", "10.0.0.2"),
            ]
        );
    }

    #[test]
    fn test_threshold_zero_alerts_on_every_tracked_key() {
        // Documented misuse: threshold 0 surfaces everything seen.
        let mut t = tracker(0);
        t.record(&failed("alice", "10.0.0.5"));
        let alerts = t.finalize();
        assert_eq!(alerts.len(), 1);
        // high cutoff saturates to 0, so everything classifies high
        assert_eq!(alerts[0].severity, Severity::High);
    }

    // ===========================================
    // Concrete scenarios
    // ===========================================

    #[test]
    fn test_scenario_mixed_statuses_below_and_at_threshold() {
        let mut t = tracker(5);
        t.record(&failed("alice", "10.0.0.5"));
        t.record(&AuthEvent::new("alice", "10.0.0.5", "SUCCESS"));
        for _ in 0..5 {
            t.record(&failed("carol", "172.16.0.3"));
        }

        assert_eq!(t.failure_count(&TrackingKey::new("alice", "10.0.0.5")), 1);
        assert_eq!(t.failure_count(&TrackingKey::new("carol", "172.16.0.3")), 5);

        let alerts = t.finalize();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].username, "carol");
        assert_eq!(alerts[0].source_address, "172.16.0.3");
        assert_eq!(alerts[0].fail_count, 5);
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn test_scenario_ten_failures_is_high() {
        let mut t = tracker(5);
        for _ in 0..10 {
            t.record(&failed("dave", "9.9.9.9"));
        }

        let alerts = t.finalize();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].fail_count, 10);
        assert_eq!(alerts[0].severity, Severity::High);
    }
}
