// src/render/date.rs
// =============================================================================
// Turns GitHub timestamps into short "Mon YYYY" labels.
//
// Accepted inputs:
// - A UTC designator or offset, seconds optional: 2024-01-15T10:00:00Z,
//   2024-01-15T10:00+05:30, 2024-01-15T10:00:00+00
// - Naive date-times: 2024-01-15T10:00:00, 2024-01-15 10:00:00.123
// - Plain dates: 2024-01-15
// - The basic (no separators) form: 20240115T100000Z, 20240115
//
// Times with an offset are labelled in their own offset (no conversion to
// local time). Anything we can't parse becomes "" and the caller leaves the
// field out.
// =============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OUTPUT_FORMAT: &str = "%b %Y";

// `%#z` takes "+05:30", "+0530" and the short "+05"
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

// Formats an ISO-8601 timestamp as e.g. "Jan 2024"
//
// Returns an empty string for empty or unparsable input.
pub fn format_month_year(date_str: &str) -> String {
    parse_timestamp(date_str)
        .map(|dt| dt.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_timestamp(date_str: &str) -> Option<NaiveDateTime> {
    if date_str.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.naive_local());
    }

    // "Z" is the UTC designator; spell it as an offset for the formats below
    let normalized = date_str.replace('Z', "+00:00");

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt.naive_local());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_str, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Checks the "Abc 1234" shape without pulling in a regex crate
    fn is_month_year(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 8
            && bytes[..3].iter().all(u8::is_ascii_alphabetic)
            && bytes[3] == b' '
            && bytes[4..].iter().all(u8::is_ascii_digit)
    }

    #[test]
    fn test_utc_designator() {
        assert_eq!(format_month_year("2024-01-15T10:00:00Z"), "Jan 2024");
    }

    #[test]
    fn test_numeric_offset_keeps_its_own_month() {
        // 23:30 on Dec 31 at -05:00 is already January in UTC
        assert_eq!(format_month_year("2023-12-31T23:30:00-05:00"), "Dec 2023");
        assert_eq!(format_month_year("2022-07-04T08:00:00+0200"), "Jul 2022");
    }

    #[test]
    fn test_naive_and_date_only_inputs() {
        assert_eq!(format_month_year("2021-03-09T16:45:12"), "Mar 2021");
        assert_eq!(format_month_year("2021-03-09 16:45:12.250"), "Mar 2021");
        assert_eq!(format_month_year("2019-11-02"), "Nov 2019");
    }

    #[test]
    fn test_offsets_without_seconds_and_basic_form() {
        assert_eq!(format_month_year("2024-01-15T10:00Z"), "Jan 2024");
        assert_eq!(format_month_year("2024-01-15T10:00+05:30"), "Jan 2024");
        assert_eq!(format_month_year("2024-01-15T10:00:00+00"), "Jan 2024");
        assert_eq!(format_month_year("20240115T100000Z"), "Jan 2024");
        assert_eq!(format_month_year("20180305"), "Mar 2018");
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(format_month_year("2020-02-29T12:00:00.123456Z"), "Feb 2020");
    }

    #[test]
    fn test_empty_and_invalid_inputs() {
        for input in [
            "",
            "not a date",
            "2024-13-01T00:00:00Z",
            "2024-02-30",
            "15/01/2024",
            "2024-01-15T25:00:00Z",
        ] {
            assert_eq!(format_month_year(input), "", "input: {:?}", input);
        }
    }

    #[test]
    fn test_valid_inputs_have_month_year_shape() {
        for input in [
            "2008-04-10T17:33:01Z",
            "2015-09-30T00:00:00+09:00",
            "1999-12-31T23:59:59",
            "2030-06-01",
            "2024-01-15T10:00Z",
            "2024-01-15T10:00+05:30",
            "2024-01-15 10:00-08:00",
            "2024-01-15T10:00:00+00",
            "20240115T100000Z",
            "20240115T1000+0100",
            "20240115",
        ] {
            let formatted = format_month_year(input);
            assert!(is_month_year(&formatted), "{:?} -> {:?}", input, formatted);
        }
    }
}
