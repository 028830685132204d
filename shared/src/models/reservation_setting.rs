//! Reservation Setting Model (预订时段设置)

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Table count for one table type within a setting's window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAllocation {
    pub table_type_id: i64,
    pub table_type_name: String,
    pub quantity: i32,
}

/// Table inventory attached to one reservation setting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapacitySettings {
    #[serde(default)]
    pub available_tables: Vec<TableAllocation>,
}

/// When a setting applies: recurring weekday default or date-specific override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Schedule {
    /// Recurring default for one weekday
    Default { day_of_week: Weekday },
    /// Override for one calendar date (holiday hours etc.)
    Override { specific_date: NaiveDate },
}

/// Reservation setting row
///
/// Created and edited by staff through the settings UI; read-only to the
/// engine. For a given date a specific-date override strictly beats the
/// weekday default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSetting {
    pub id: i64,
    pub schedule: Schedule,
    /// Window open time ("HH:MM")
    pub reservation_start_time: String,
    /// Window close time ("HH:MM")
    pub reservation_end_time: String,
    /// Slot granularity in minutes
    pub timeslot_length_minutes: i64,
    #[serde(default)]
    pub capacity_settings: CapacitySettings,
    pub is_active: bool,
}
