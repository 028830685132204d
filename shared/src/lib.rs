//! Shared types for the reservation back office
//!
//! Domain models, unified error type, and common utility types used by
//! the booking engine and the surrounding services.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult};
pub use types::Timestamp;
