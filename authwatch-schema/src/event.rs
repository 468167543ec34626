//! Authentication event and tracking key types.

use serde::{Deserialize, Serialize};

/// A single authentication event as read from an auth log.
///
/// All fields are plain text and may be empty: the log reader degrades
/// missing columns to empty strings rather than rejecting the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEvent {
    /// Account name the attempt was made against.
    pub username: String,
    /// Address the attempt originated from.
    pub source_address: String,
    /// Outcome as recorded in the log (e.g. "FAILED", "SUCCESS").
    /// Compared case-insensitively by the detector.
    pub status: String,
}

impl AuthEvent {
    /// Create an event from its three fields.
    pub fn new(
        username: impl Into<String>,
        source_address: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            source_address: source_address.into(),
            status: status.into(),
        }
    }

    /// The tracking key this event is grouped under.
    pub fn key(&self) -> TrackingKey {
        TrackingKey::new(self.username.clone(), self.source_address.clone())
    }
}

/// The `(username, source_address)` pair failure counts are grouped by.
///
/// Two events with the same username but different source addresses are
/// tracked independently, and vice versa. Empty components are valid key
/// material: absence of data is not an error at this layer.
///
/// Ordering is lexicographic by username, then source address. The
/// detector relies on this for deterministic alert emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackingKey {
    pub username: String,
    pub source_address: String,
}

impl TrackingKey {
    /// Create a tracking key from its components.
    pub fn new(username: impl Into<String>, source_address: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            source_address: source_address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_copies_fields() {
        let event = AuthEvent::new("alice", "10.0.0.5", "FAILED");
        let key = event.key();
        assert_eq!(key.username, "alice");
        assert_eq!(key.source_address, "10.0.0.5");
    }

    #[test]
    fn test_keys_differ_by_source_address() {
        let a = TrackingKey::new("alice", "10.0.0.5");
        let b = TrackingKey::new("alice", "10.0.0.6");
        assert_ne!(a, b);
    }

    #[test]
    fn test_keys_differ_by_username() {
        let a = TrackingKey::new("alice", "10.0.0.5");
        let b = TrackingKey::new("bob", "10.0.0.5");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_components_are_valid() {
        let key = TrackingKey::new("", "");
        assert_eq!(key, TrackingKey::new("", ""));
    }

    #[test]
    fn test_key_ordering_is_username_then_address() {
        let mut keys = vec![
            TrackingKey::new("bob", "10.0.0.1"),
            TrackingKey::new("alice", "10.0.0.9"),
            TrackingKey::new("alice", "10.0.0.1"),
        ];
        keys.sort();
        assert_eq!(keys[0], TrackingKey::new("alice", "10.0.0.1"));
        assert_eq!(keys[1], TrackingKey::new("alice", "10.0.0.9"));
        assert_eq!(keys[2], TrackingKey::new("bob", "10.0.0.1"));
    }
}
