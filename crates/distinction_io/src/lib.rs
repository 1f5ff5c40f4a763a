//! # Distinction IO
//!
//! Persistence layer for the distinction universe, layered entirely on the
//! engine's snapshot read interface. The core never touches a file; this
//! crate serializes snapshots to versioned JSON envelopes and rebuilds
//! engines from them.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization/deserialization helpers
//! - Atomic snapshot save/load with integrity validation

/// Error types and result aliases for I/O operations
pub mod error;
/// Snapshot file format, atomic save/load, and engine restore
pub mod persistence;
/// Validated JSON serialization helpers
pub mod serialization;

pub use error::{IoError, Result};
pub use persistence::{
    load_snapshot, restore_engine, save_snapshot, SnapshotFile, SNAPSHOT_FORMAT_VERSION,
};
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
