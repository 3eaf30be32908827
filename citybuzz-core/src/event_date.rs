//! Parsing and formatting of event display dates.
//!
//! Events carry their date as a short display string in the form
//! `M/dd @ h a` ("1/16 @ 7 PM", "2/22 @ 7:30 PM"). The string has no
//! year, so callers supply one (normally the current year) when they need
//! something comparable. Everything here works in the host's local
//! calendar; there is no time zone handling.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{NaiveDateTime, Timelike};

// Spaces match any amount of whitespace, including none.
const WITH_MINUTES: &str = "%Y %m/%d @ %I:%M %p";
const ON_THE_HOUR: &str = "%Y %m/%d @ %I %p";

/// Parse a display date, substituting `year` for the missing year.
///
/// Returns `None` for anything that doesn't match the format or doesn't
/// name a real calendar day (e.g. "2/30 @ 7 PM", or "2/29" outside a leap
/// year).
pub fn parse_event_date(input: &str, year: i32) -> Option<NaiveDateTime> {
    let input = format!("{year} {}", input.trim());

    if let Ok(datetime) = NaiveDateTime::parse_from_str(&input, WITH_MINUTES) {
        return Some(datetime);
    }

    // chrono won't build a time without minutes, so fill them in.
    let mut parsed = Parsed::new();
    parse(&mut parsed, &input, StrftimeItems::new(ON_THE_HOUR)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_datetime_with_offset(0).ok()
}

/// Format a date/time the way submitted events store it.
///
/// Minutes are only written when they are non-zero.
pub fn format_event_date(datetime: NaiveDateTime) -> String {
    if datetime.minute() == 0 {
        datetime.format("%-m/%d @ %-I %p").to_string()
    } else {
        datetime.format("%-m/%d @ %-I:%M %p").to_string()
    }
}

/// Long form for detail pages, e.g. "Friday, February 13 at 7:00 PM".
pub fn describe_event_date(datetime: NaiveDateTime) -> String {
    datetime.format("%A, %B %-d at %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_basic_format() {
        assert_eq!(parse_event_date("1/16 @ 7 PM", 2026), Some(at(2026, 1, 16, 19, 0)));
        assert_eq!(parse_event_date("2/17 @ 8 AM", 2025), Some(at(2025, 2, 17, 8, 0)));
    }

    #[test]
    fn test_parse_padded_and_minutes() {
        assert_eq!(parse_event_date("02/05 @ 10 PM", 2026), Some(at(2026, 2, 5, 22, 0)));
        assert_eq!(parse_event_date("2/22 @ 7:30 PM", 2026), Some(at(2026, 2, 22, 19, 30)));
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        assert_eq!(parse_event_date("3/1 @ 12 PM", 2026), Some(at(2026, 3, 1, 12, 0)));
        assert_eq!(parse_event_date("3/1 @ 12 AM", 2026), Some(at(2026, 3, 1, 0, 0)));
    }

    #[test]
    fn test_parse_is_lenient_on_spacing_and_case() {
        assert_eq!(parse_event_date("1/8@11am", 2026), Some(at(2026, 1, 8, 11, 0)));
        assert_eq!(parse_event_date("  1/8  @  11 Am ", 2026), Some(at(2026, 1, 8, 11, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "not-a-date",
            "",
            "1/16",
            "1/16 7 PM",
            "1/16 @ 7",
            "1/16 @ 13 PM",
            "1/16 @ 0 AM",
            "1/16 @ 7:60 PM",
            "1/16 @ 7 XM",
            "13/1 @ 7 PM",
            "2/30 @ 7 PM",
            "1/16 @ 7 @ PM",
            "a/b @ 7 PM",
            "2026-01-16T19:00:00Z",
        ] {
            assert_eq!(parse_event_date(input, 2026), None, "should reject {:?}", input);
        }
    }

    #[test]
    fn test_parse_accepts_single_digit_minutes() {
        assert_eq!(parse_event_date("1/16 @ 7:5 PM", 2026), Some(at(2026, 1, 16, 19, 5)));
    }

    #[test]
    fn test_leap_day_depends_on_year() {
        assert!(parse_event_date("2/29 @ 9 AM", 2028).is_some());
        assert!(parse_event_date("2/29 @ 9 AM", 2026).is_none());
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let cases = [at(2026, 2, 5, 19, 0), at(2026, 11, 23, 9, 0), at(2026, 7, 4, 21, 45)];
        for dt in cases {
            let formatted = format_event_date(dt);
            assert_eq!(parse_event_date(&formatted, 2026), Some(dt), "{}", formatted);
        }
    }

    #[test]
    fn test_format_matches_display_style() {
        assert_eq!(format_event_date(at(2026, 2, 5, 19, 0)), "2/05 @ 7 PM");
        assert_eq!(format_event_date(at(2026, 2, 22, 19, 30)), "2/22 @ 7:30 PM");
        assert_eq!(format_event_date(at(2026, 12, 31, 0, 0)), "12/31 @ 12 AM");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe_event_date(at(2026, 2, 13, 19, 0)),
            "Friday, February 13 at 7:00 PM"
        );
    }
}
