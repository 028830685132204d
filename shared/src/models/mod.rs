//! Data models
//!
//! Shared between the booking engine and the surrounding back-office
//! services (via API). All IDs are `i64`; instants are Unix milliseconds
//! (`shared::types::Timestamp`); times of day travel as `"HH:MM"` strings.

pub mod business_profile;
pub mod reservation;
pub mod reservation_setting;
pub mod table_type;
pub mod time_slot;

// Re-exports
pub use business_profile::*;
pub use reservation::*;
pub use reservation_setting::*;
pub use table_type::*;
pub use time_slot::*;
