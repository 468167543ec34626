//! Filesystem abstraction for authwatch.
//!
//! Provides the `Filesystem` trait used by the log reader and alert
//! writer, with a real implementation and an in-memory mock for
//! deterministic tests.

pub mod filesystem;

pub use filesystem::{Filesystem, FsError, MockFilesystem, RealFilesystem};
