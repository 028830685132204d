//! Availability Engine
//!
//! Orchestration: resolve the operating window for the queried date,
//! enumerate candidate slots, and evaluate per-slot capacity into the
//! ordered [`TimeSlot`] list.

use chrono::NaiveDate;
use chrono_tz::Tz;

use shared::error::AppResult;
use shared::models::{BusinessProfile, Reservation, ReservationSetting, TableType, TimeSlot};

use crate::utils::{time, validation};

use super::evaluator;
use super::ledger::{CapacityLedger, MinuteSpan};
use super::slots::SlotIter;
use super::window;

/// Reservation availability engine
///
/// Stateless per invocation: settings, inventory and reservations are passed
/// in as plain values, so concurrent queries need no locking. The engine
/// only advises availability at query time; the booking write path remains
/// the enforcement point against double-booking.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityEngine {
    tz: Tz,
}

impl AvailabilityEngine {
    /// Resolve the business timezone once
    ///
    /// An unknown identifier is a fatal configuration error; no slot list
    /// can be produced for such a profile.
    pub fn new(profile: &BusinessProfile) -> AppResult<Self> {
        Ok(Self {
            tz: time::parse_timezone(&profile.timezone)?,
        })
    }

    /// Business timezone in effect for this engine
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Generate the ordered slot list for `date` and `party_size`
    ///
    /// Dates with no applicable setting produce an empty list (closed day,
    /// not an error). Output order is slot-start ascending, exactly the
    /// generator's sequence.
    pub fn generate_slots(
        &self,
        date: NaiveDate,
        party_size: i32,
        settings: &[ReservationSetting],
        table_types: &[TableType],
        reservations: &[Reservation],
    ) -> AppResult<Vec<TimeSlot>> {
        validation::validate_party_size(party_size)?;

        let Some(win) = window::resolve_window(date, settings)? else {
            return Ok(Vec::new());
        };

        let ledger = CapacityLedger::build(date, &win.capacity, table_types, reservations, self.tz);

        let mut slots = Vec::new();
        for start in SlotIter::new(&win) {
            let start_minute = time::minute_of_day(start);
            let span = MinuteSpan {
                start: start_minute,
                end: start_minute + win.slot_minutes,
            };
            let remaining = ledger.remaining_at(span);
            slots.push(TimeSlot {
                start,
                end: start + chrono::Duration::minutes(win.slot_minutes),
                available: evaluator::can_seat(&remaining, party_size),
            });
        }
        Ok(slots)
    }
}
