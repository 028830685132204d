//! Input validation helpers
//!
//! Fail-fast boundary checks performed before the engine does any work.
//! Structurally invalid input is rejected with a descriptive error; the
//! engine does not attempt partial recovery.

use chrono::NaiveDate;
use chrono_tz::Tz;

use shared::error::AppError;

use super::time;

/// Largest party a single booking may request
pub const MAX_PARTY_SIZE: i32 = 100;

/// Validate the requested party size (1..=MAX_PARTY_SIZE)
pub fn validate_party_size(party_size: i32) -> Result<(), AppError> {
    if party_size < 1 {
        return Err(AppError::validation(format!(
            "party_size must be at least 1 (got {party_size})"
        )));
    }
    if party_size > MAX_PARTY_SIZE {
        return Err(AppError::validation(format!(
            "party_size {party_size} exceeds the maximum of {MAX_PARTY_SIZE}"
        )));
    }
    Ok(())
}

/// Validate the queried date against the booking-advance bound
///
/// The date must fall within `[today, today + max_advance_hours]` in the
/// business timezone. Callers run this before asking for slots; the engine
/// itself does not enforce it.
pub fn validate_booking_advance(
    date: NaiveDate,
    max_advance_hours: i64,
    tz: Tz,
) -> Result<(), AppError> {
    let today = time::today_in_tz(tz);
    if date < today {
        return Err(AppError::validation(format!(
            "Date {date} is in the past (today is {today})"
        )));
    }
    let horizon = today + chrono::Duration::hours(max_advance_hours.max(0));
    if date > horizon {
        return Err(AppError::validation(format!(
            "Date {date} is beyond the booking horizon {horizon}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_party_size() {
        assert!(validate_party_size(1).is_ok());
        assert!(validate_party_size(12).is_ok());
        assert!(validate_party_size(MAX_PARTY_SIZE).is_ok());

        assert!(validate_party_size(0).is_err());
        assert!(validate_party_size(-3).is_err());
        assert!(validate_party_size(MAX_PARTY_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_booking_advance() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let today = time::today_in_tz(tz);

        // 720 hours = 30 days of advance booking
        assert!(validate_booking_advance(today, 720, tz).is_ok());
        assert!(validate_booking_advance(today + chrono::Duration::days(30), 720, tz).is_ok());

        assert!(validate_booking_advance(today - chrono::Duration::days(1), 720, tz).is_err());
        assert!(validate_booking_advance(today + chrono::Duration::days(31), 720, tz).is_err());
    }
}
