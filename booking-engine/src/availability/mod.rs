//! Reservation Availability Module
//!
//! Computes the bookable time slots for a party on a calendar date,
//! combining operating-window resolution, interval-overlap capacity
//! accounting, and a deterministic table-assignment feasibility check.

mod engine;
mod evaluator;
mod ledger;
mod slots;
mod window;

pub use engine::*;
pub use evaluator::*;
pub use ledger::*;
pub use slots::*;
pub use window::*;
