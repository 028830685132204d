//! Reservation Model (预订)

use serde::{Deserialize, Serialize};

use crate::types::{MILLIS_PER_MINUTE, Timestamp};

/// Reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "NO_SHOW")]
    NoShow,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ReservationStatus {
    /// Terminal statuses never transition again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::NoShow | Self::Cancelled)
    }
}

/// Reservation record
///
/// `start_at` is the stored instant; its business-local calendar date and
/// time of day are derived through the engine's time helpers, never by
/// comparing raw UTC dates. `duration_minutes` is the slot granularity in
/// effect when the reservation was booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub party_size: i32,
    /// Reservation start instant (Unix millis)
    pub start_at: Timestamp,
    /// Booked slot length in minutes
    pub duration_minutes: i64,
    #[serde(default)]
    pub status: ReservationStatus,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Reservation {
    /// Reservation end instant (Unix millis)
    pub fn end_at(&self) -> Timestamp {
        self.start_at + self.duration_minutes * MILLIS_PER_MINUTE
    }

    /// Whether this reservation still occupies table capacity
    pub fn occupies_capacity(&self) -> bool {
        !matches!(self.status, ReservationStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::NoShow).unwrap();
        assert_eq!(json, "\"NO_SHOW\"");

        let parsed: ReservationStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ReservationStatus::Pending.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
        assert!(ReservationStatus::Completed.is_terminal());
        assert!(ReservationStatus::NoShow.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }
}
