//! Time Slot Model
//!
//! Value object returned by the availability engine. Never persisted,
//! regenerated on every query.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Candidate reservation slot with its availability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
    pub available: bool,
}

/// Serde helper: NaiveTime as "HH:MM"
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        NaiveTime::parse_from_str(&value, FORMAT)
            .map_err(|_| de::Error::custom(format!("invalid time: {}", value)))
    }
}
