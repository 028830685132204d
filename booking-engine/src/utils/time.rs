//! Time helpers - business timezone conversion
//!
//! Every comparison between a stored reservation instant and a caller-selected
//! calendar date goes through these functions. Comparing raw UTC dates against
//! a locally-selected date goes wrong by one day near midnight.

use chrono::{NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;

use shared::error::{AppError, AppResult};
use shared::types::Timestamp;

/// Resolve an IANA timezone identifier
///
/// An unrecognized identifier is a fatal configuration error, not a
/// per-request failure.
pub fn parse_timezone(tz: &str) -> AppResult<Tz> {
    tz.parse::<Tz>().map_err(|_| AppError::invalid_timezone(tz))
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a time-of-day string (HH:MM)
pub fn parse_hhmm(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", time)))
}

/// Stored instant (Unix millis) → business-local calendar date and time of day
pub fn to_business_local(ts: Timestamp, tz: Tz) -> (NaiveDate, NaiveTime) {
    let dt = chrono::DateTime::from_timestamp_millis(ts)
        .unwrap_or_else(chrono::Utc::now)
        .with_timezone(&tz);
    (dt.date_naive(), dt.time())
}

/// Local date + time of day → Unix millis (business timezone)
///
/// DST gap fallback: if the local time does not exist, fall back to UTC.
pub fn local_to_millis(date: NaiveDate, time: NaiveTime, tz: Tz) -> i64 {
    let naive = date.and_time(time);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Current calendar date in the business timezone
pub fn today_in_tz(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Minute of day (0..1440) for a time of day
pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Minute of day back to a time of day; `None` outside 0..1440
pub fn time_from_minutes(minutes: i64) -> Option<NaiveTime> {
    if !(0..1440).contains(&minutes) {
        return None;
    }
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timezone() {
        assert!(parse_timezone("Europe/Madrid").is_ok());
        assert!(parse_timezone("America/New_York").is_ok());

        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err, AppError::InvalidTimezone("Mars/Olympus".to_string()));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-08-06").unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
        );
        assert!(parse_date("06/08/2026").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            parse_hhmm("18:30").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("18h30").is_err());
    }

    #[test]
    fn test_to_business_local_crosses_midnight() {
        // 2026-03-07 03:30 UTC is still 2026-03-06 22:30 in New York (UTC-5)
        let tz: Tz = "America/New_York".parse().unwrap();
        let instant = chrono::Utc
            .with_ymd_and_hms(2026, 3, 7, 3, 30, 0)
            .unwrap()
            .timestamp_millis();

        let (date, time) = to_business_local(instant, tz);
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(22, 30, 0).unwrap());
    }

    #[test]
    fn test_local_to_millis_round_trip() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let time = NaiveTime::from_hms_opt(20, 0, 0).unwrap();

        let millis = local_to_millis(date, time, tz);
        assert_eq!(to_business_local(millis, tz), (date, time));
    }

    #[test]
    fn test_local_to_millis_dst_gap_falls_back() {
        // 2026-03-29 02:30 does not exist in Madrid (clocks jump 02:00 → 03:00)
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 29).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let millis = local_to_millis(date, time, tz);
        assert_eq!(millis, date.and_time(time).and_utc().timestamp_millis());
    }

    #[test]
    fn test_minute_of_day_round_trip() {
        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        assert_eq!(minute_of_day(time), 630);
        assert_eq!(time_from_minutes(630), Some(time));

        assert_eq!(time_from_minutes(-1), None);
        assert_eq!(time_from_minutes(1440), None);
    }
}
