//! Date parsing for onboarding input and date queries.
//!
//! Onboarding accepts a small fixed set of formats; the "on" query
//! accepts only strict `YYYY-MM-DD`.

use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Birth date layouts tried in order: chrono format, field separator and
/// position of the year field
const BIRTH_DATE_FORMATS: [(&str, char, usize); 2] =
    [("%d.%m.%Y", '.', 2), ("%Y-%m-%d", '-', 0)];

/// Display format used when echoing dates back to the user
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Parse free-form onboarding text into a birth date
///
/// Supports:
/// - "05.03.1990" (DD.MM.YYYY)
/// - "1990-03-05" (YYYY-MM-DD)
///
/// The whole trimmed input must match; calendar-invalid dates such as
/// "31.02.2020" are rejected rather than clamped. Years are exactly four
/// digits, no sign, and never 0000.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    for (format, separator, year_index) in BIRTH_DATE_FORMATS {
        if !has_plain_fields(input, separator, year_index) {
            continue;
        }
        match NaiveDate::parse_from_str(input, format) {
            Ok(date) if date.year() >= 1 => {
                debug!(input = %input, date = %date, format, "Parsed birth date");
                return Ok(date);
            }
            _ => {}
        }
    }

    debug!(input = %input, "Failed to parse birth date");
    Err(Error::NotRecognized(input.to_string()))
}

/// Parse the argument of a date query in strict `YYYY-MM-DD` form
pub fn parse_query_date(arg: &str) -> Result<NaiveDate> {
    let malformed = || Error::MalformedDate(arg.to_string());

    let bytes = arg.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(malformed());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(malformed());
    }

    // Shape checked above, so these slices are ASCII digits
    let year: i32 = arg[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = arg[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = arg[8..10].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|date| date.year() >= 1)
        .ok_or_else(malformed)
}

/// Three unsigned digit fields split by `separator`: four digits for the
/// year, one or two for day and month
fn has_plain_fields(input: &str, separator: char, year_index: usize) -> bool {
    let fields: Vec<&str> = input.split(separator).collect();
    fields.len() == 3
        && fields.iter().enumerate().all(|(i, field)| {
            let width_ok = if i == year_index {
                field.len() == 4
            } else {
                (1..=2).contains(&field.len())
            };
            width_ok && field.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Format a date as DD.MM.YYYY
pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_dotted_format() {
        assert_eq!(parse_birth_date("05.03.1990").unwrap(), ymd(1990, 3, 5));
    }

    #[test]
    fn test_parse_iso_format() {
        assert_eq!(parse_birth_date("1990-03-05").unwrap(), ymd(1990, 3, 5));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_birth_date("  05.03.1990 \n").unwrap(), ymd(1990, 3, 5));
    }

    #[test]
    fn test_rejects_invalid_calendar_dates() {
        assert!(matches!(
            parse_birth_date("31.02.2020"),
            Err(Error::NotRecognized(_))
        ));
        assert!(parse_birth_date("31.04.2021").is_err());
        assert!(parse_birth_date("2021-04-31").is_err());
        assert!(parse_birth_date("29.02.2021").is_err());
        assert_eq!(parse_birth_date("29.02.2020").unwrap(), ymd(2020, 2, 29));
    }

    #[test]
    fn test_single_digit_day_and_month_accepted() {
        assert_eq!(parse_birth_date("5.3.1990").unwrap(), ymd(1990, 3, 5));
        assert_eq!(parse_birth_date("1990-3-5").unwrap(), ymd(1990, 3, 5));
    }

    #[test]
    fn test_year_zero_rejected() {
        assert!(matches!(
            parse_birth_date("01.01.0000"),
            Err(Error::NotRecognized(_))
        ));
        assert!(parse_birth_date("0000-01-01").is_err());
        assert!(matches!(
            parse_query_date("0000-01-01"),
            Err(Error::MalformedDate(_))
        ));
        assert_eq!(parse_birth_date("01.01.0001").unwrap(), ymd(1, 1, 1));
        assert_eq!(parse_query_date("0001-01-01").unwrap(), ymd(1, 1, 1));
    }

    #[test]
    fn test_rejects_garbage_and_partial_matches() {
        for input in [
            "not a date", "", "05.03.1990 extra", "05/03/1990", "1990.03.05",
            "05.03.90", "05.03.+1990", "05.03.-001", "05.03.01990", "+1990-03-05", "005.03.1990",
        ] {
            assert!(
                parse_birth_date(input).is_err(),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_dotted_roundtrip_preserves_text() {
        for text in ["01.01.1900", "29.02.2000", "31.12.1999", "05.03.1990", "30.04.2024"] {
            let date = parse_birth_date(text).unwrap();
            assert_eq!(format_display(date), text);
        }
    }

    #[test]
    fn test_query_date_strict() {
        assert_eq!(parse_query_date("2025-12-31").unwrap(), ymd(2025, 12, 31));

        for arg in ["31.12.2025", "2025-1-05", "2025-13-01", "2025-02-30", " 2025-12-31", "2025-12-31x", "２０２５-12-31"] {
            assert!(
                matches!(parse_query_date(arg), Err(Error::MalformedDate(_))),
                "expected {:?} to be rejected",
                arg
            );
        }
    }
}
