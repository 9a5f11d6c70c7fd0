//! Date helper functions

use chrono::{DateTime, NaiveDate};

/// Parse an ISO-8601 date string into epoch milliseconds.
///
/// Accepts both full RFC 3339 timestamps and bare `YYYY-MM-DD` dates
/// (Notion emits either, depending on whether the property has a time).
/// Anything unparseable compares as epoch 0 so sorting never fails.
pub fn parse_timestamp(date: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.timestamp_millis();
    }
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_timestamp("1970-01-01"), 0);
        assert!(parse_timestamp("2024-03-01") > parse_timestamp("2024-02-01"));
    }

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2024-01-15T10:30:00+09:00");
        assert!(ts > 0);
    }

    #[test]
    fn test_unparseable_is_epoch_zero() {
        assert_eq!(parse_timestamp(""), 0);
        assert_eq!(parse_timestamp("not a date"), 0);
        assert_eq!(parse_timestamp("2024/01/15"), 0);
    }
}
