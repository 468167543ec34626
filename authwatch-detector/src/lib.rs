//! Authwatch detection engine.
//!
//! Aggregates failed authentication attempts per (username, source
//! address) pair and classifies threshold breaches into severity-tiered
//! alerts. Pure and single-threaded: no I/O happens in this crate.

pub mod config;
pub mod tracker;

pub use config::{DetectorConfig, DEFAULT_THRESHOLD};
pub use tracker::{classify, FailureTracker};
