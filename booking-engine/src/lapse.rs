//! Reservation status lapse rule
//!
//! Time-based auto-transitions evaluated by the surrounding scheduler loop:
//! a pending reservation whose start has passed lapses to no-show, a
//! confirmed reservation whose end has passed completes. The loop itself
//! (timer cadence, persisting the new status, notification glue) lives
//! outside the engine.

use shared::models::{Reservation, ReservationStatus};
use shared::types::{MILLIS_PER_MINUTE, Timestamp};

/// Grace period before a pending reservation lapses to no-show
pub const NO_SHOW_GRACE_MINUTES: i64 = 15;

/// Decide the next status for `reservation` at `now`, if any
///
/// Terminal statuses never transition. Returns `None` when the reservation
/// should stay as it is.
pub fn lapse_transition(reservation: &Reservation, now: Timestamp) -> Option<ReservationStatus> {
    if reservation.status.is_terminal() {
        return None;
    }
    match reservation.status {
        ReservationStatus::Pending
            if now >= reservation.start_at + NO_SHOW_GRACE_MINUTES * MILLIS_PER_MINUTE =>
        {
            Some(ReservationStatus::NoShow)
        }
        ReservationStatus::Confirmed if now >= reservation.end_at() => {
            Some(ReservationStatus::Completed)
        }
        _ => None,
    }
}
