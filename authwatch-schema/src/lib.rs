//! Authwatch event and alert schema.
//!
//! Defines the types shared between the log reader, the failure
//! detector, and the alert writer.

mod alert;
mod event;

pub use alert::{Alert, Severity};
pub use event::{AuthEvent, TrackingKey};
