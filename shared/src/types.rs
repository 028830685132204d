//! Common types for the shared crate
//!
//! Utility types used across the workspace

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;
