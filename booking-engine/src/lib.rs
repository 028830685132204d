//! Booking Engine - reservation availability for the restaurant back office
//!
//! Given a business's operating hours, a day's table inventory, and the
//! reservations already booked, the engine produces the list of bookable
//! time slots for a new party of a given size. It is a pure, stateless,
//! in-process computation: all data is fetched by the caller and passed in
//! as plain values, so concurrent invocation needs no locking.
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── availability/  # window resolver, slot iterator, capacity ledger, evaluator
//! ├── lapse.rs       # time-based reservation status transitions
//! └── utils/         # business-timezone helpers, validation, logging
//! ```

pub mod availability;
pub mod lapse;
pub mod utils;

// Re-export public engine types
pub use availability::{
    AvailabilityEngine, CapacityLedger, MinuteSpan, OperatingWindow, SlotIter, TableAssignment,
    TypeRemaining, can_seat, plan_assignment, resolve_window,
};
pub use lapse::lapse_transition;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
