//! Slot Generator
//!
//! Enumerates candidate slot start times between open and close at the
//! configured granularity. Pure function of the window; reservations and
//! capacity are not consulted here.

use chrono::NaiveTime;

use crate::utils::time;

use super::window::OperatingWindow;

/// Lazy, finite, restartable sequence of candidate slot starts
///
/// Yields `start, start+Δ, …` while `start + Δ <= end`. Empty when the
/// granularity is non-positive or the window is empty. Minute-of-day
/// arithmetic, so a window touching midnight cannot wrap.
#[derive(Debug, Clone)]
pub struct SlotIter {
    next_minute: i64,
    end_minute: i64,
    step: i64,
}

impl SlotIter {
    pub fn new(window: &OperatingWindow) -> Self {
        Self {
            next_minute: time::minute_of_day(window.start_time),
            end_minute: time::minute_of_day(window.end_time),
            step: window.slot_minutes,
        }
    }
}

impl Iterator for SlotIter {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<NaiveTime> {
        if self.step <= 0 || self.next_minute + self.step > self.end_minute {
            return None;
        }
        let slot = time::time_from_minutes(self.next_minute)?;
        self.next_minute += self.step;
        Some(slot)
    }
}
