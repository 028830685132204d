//! Operating Window Resolver
//!
//! Selects the effective reservation setting for one calendar date and
//! yields the open/close time, slot granularity and table inventory.

use chrono::{Datelike, NaiveDate, NaiveTime};

use shared::error::{AppError, AppResult};
use shared::models::{CapacitySettings, ReservationSetting, Schedule};

use crate::utils::time;

/// Open/close time and slot granularity in effect for one calendar date
#[derive(Debug, Clone)]
pub struct OperatingWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Slot granularity in minutes
    pub slot_minutes: i64,
    /// Table inventory for this window
    pub capacity: CapacitySettings,
}

/// Resolve the effective setting for `date`
///
/// Precedence:
/// 1. an active setting overriding this specific date,
/// 2. otherwise the active default for the date's weekday,
/// 3. otherwise the business is closed that date (`Ok(None)`).
///
/// Two matches at the same precedence level are a configuration error; the
/// resolver surfaces it instead of guessing.
pub fn resolve_window(
    date: NaiveDate,
    settings: &[ReservationSetting],
) -> AppResult<Option<OperatingWindow>> {
    match select_setting(date, settings)? {
        Some(setting) => build_window(setting).map(Some),
        None => Ok(None),
    }
}

fn select_setting(
    date: NaiveDate,
    settings: &[ReservationSetting],
) -> AppResult<Option<&ReservationSetting>> {
    let mut overrides = settings.iter().filter(|s| s.is_active).filter(
        |s| matches!(s.schedule, Schedule::Override { specific_date } if specific_date == date),
    );
    if let Some(first) = overrides.next() {
        if overrides.next().is_some() {
            return Err(AppError::configuration(format!(
                "multiple date-specific settings for {date}"
            )));
        }
        return Ok(Some(first));
    }

    let weekday = date.weekday();
    let mut defaults = settings.iter().filter(|s| s.is_active).filter(
        |s| matches!(s.schedule, Schedule::Default { day_of_week } if day_of_week == weekday),
    );
    match defaults.next() {
        Some(first) => {
            if defaults.next().is_some() {
                return Err(AppError::configuration(format!(
                    "multiple default settings for {weekday}"
                )));
            }
            Ok(Some(first))
        }
        None => Ok(None),
    }
}

fn build_window(setting: &ReservationSetting) -> AppResult<OperatingWindow> {
    Ok(OperatingWindow {
        start_time: time::parse_hhmm(&setting.reservation_start_time)?,
        end_time: time::parse_hhmm(&setting.reservation_end_time)?,
        slot_minutes: setting.timeslot_length_minutes,
        capacity: setting.capacity_settings.clone(),
    })
}
