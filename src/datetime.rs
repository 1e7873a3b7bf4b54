//! Date parsing and timestamp formatting for date-valued attributes.
//!
//! Extraction engines hand over date attributes as strings in a few shapes:
//! the compact `D:YYYYMMDDHHMMSS` form (with optional trailing `Z` or
//! `+HH'MM'` offset, and optional truncation down to just the year), RFC 3339,
//! and plain `YYYY-MM-DD [HH:MM:SS]`. [`parse_date`] accepts all of these.
//!
//! Parsed timestamps are rendered by [`to_sortable_string`] into a fixed
//! 17-digit UTC form at millisecond resolution, `YYYYMMDDHHMMSSmmm`, which
//! sorts lexicographically in chronological order.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a date string produced by an extraction engine.
///
/// Returns `None` when the string does not resemble any supported form.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }

    parse_compact(input.strip_prefix("D:").unwrap_or(input))
}

/// Format a timestamp into the fixed sortable form `YYYYMMDDHHMMSSmmm`.
pub fn to_sortable_string(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y%m%d%H%M%S%3f").to_string()
}

/// Parse the compact `YYYYMMDDHHMMSS[Z|+HH'MM'|-HH'MM']` form. Components
/// after the year may be truncated; missing ones default to the start of the
/// period.
fn parse_compact(s: &str) -> Option<DateTime<Utc>> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 || digits.len() % 2 != 0 || digits.len() > 14 {
        return None;
    }

    let component = |start: usize, default: u32| -> u32 {
        digits
            .get(start..start + 2)
            .and_then(|d| d.parse().ok())
            .unwrap_or(default)
    };

    let year: i32 = digits[0..4].parse().ok()?;
    let month = component(4, 1);
    let day = component(6, 1);
    let hour = component(8, 0);
    let minute = component(10, 0);
    let second = component(12, 0);

    let naive = NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, minute, second)?;

    let offset_seconds = parse_utc_offset(&s[digits.len()..]);
    Some(naive.and_utc() - chrono::Duration::seconds(offset_seconds))
}

/// Parse a trailing `Z`, `+HH'MM'`, or `-HH'MM'` offset into seconds east of
/// UTC. Missing or unrecognized suffixes are treated as UTC.
fn parse_utc_offset(suffix: &str) -> i64 {
    let mut chars = suffix.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return 0,
    };
    let digits: Vec<u32> = chars.filter_map(|c| c.to_digit(10)).collect();
    let pair = |i: usize| -> i64 {
        if digits.len() >= i + 2 {
            (digits[i] * 10 + digits[i + 1]) as i64
        } else {
            0
        }
    };
    sign * (pair(0) * 3600 + pair(2) * 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_compact_full() {
        let dt = parse_date("D:20240115093000").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_compact_without_prefix() {
        let dt = parse_date("20240115093000").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_compact_truncated() {
        let dt = parse_date("D:2024").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let dt = parse_date("D:202406").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_compact_with_offset() {
        // 09:30 at +05'00' is 04:30 UTC.
        let dt = parse_date("D:20240115093000+05'00'").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 4, 30, 0).unwrap());

        let dt = parse_date("D:20240115093000-02'30'").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());

        let dt = parse_date("D:20240115093000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_date("2024-01-15T09:30:00+01:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_plain_date_and_datetime() {
        let dt = parse_date("2024-01-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());

        let dt = parse_date("2024-01-15 09:30:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("D:99"), None);
        // Month 13 does not exist.
        assert_eq!(parse_date("D:20241301"), None);
    }

    #[test]
    fn test_sortable_string_format() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap();
        assert_eq!(to_sortable_string(dt), "20240115093005000");
    }

    #[test]
    fn test_sortable_string_orders_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(to_sortable_string(earlier) < to_sortable_string(later));
    }
}
