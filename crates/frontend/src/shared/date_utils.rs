//! Date and time formatting shared by the pages.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `2025-05-12T10:30:00Z` -> `12.05.2025`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// `2025-05-12T10:30:00Z` -> `10:30`
pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.format("%H:%M").to_string()
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Parse the value of an `<input type="datetime-local">`, e.g.
/// `2025-05-12T10:30`. Seconds are accepted but not required. Values are
/// interpreted as UTC, matching the timestamps served by the backend.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_date_and_time() {
        let dt = Utc.with_ymd_and_hms(2025, 5, 12, 10, 30, 0).unwrap();
        assert_eq!(format_date(&dt), "12.05.2025");
        assert_eq!(format_time(&dt), "10:30");
        assert_eq!(format_datetime(&dt), "12.05.2025 10:30");
    }

    #[test]
    fn parses_datetime_local_values() {
        let expected = Utc.with_ymd_and_hms(2025, 5, 12, 10, 30, 0).unwrap();
        assert_eq!(parse_datetime_local("2025-05-12T10:30"), Some(expected));
        assert_eq!(parse_datetime_local("2025-05-12T10:30:00"), Some(expected));
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("12.05.2025"), None);
    }
}
