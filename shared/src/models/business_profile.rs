//! Business Profile Model

use serde::{Deserialize, Serialize};

/// Business profile (singleton per tenant)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default)]
    pub name: String,
    /// IANA timezone identifier (e.g. "Europe/Madrid")
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// How far ahead a booking may be made, in hours
    #[serde(default = "default_advance_hours")]
    pub max_allowed_booking_advance_hours: i64,
}

fn default_timezone() -> String {
    "Europe/Madrid".to_string()
}

fn default_advance_hours() -> i64 {
    // 30 days
    720
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            timezone: default_timezone(),
            max_allowed_booking_advance_hours: default_advance_hours(),
        }
    }
}
