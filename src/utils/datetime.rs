//! Contact timestamp parsing and calendar-day comparison
//!
//! Clients report the moment of contact as a locale-style string such as
//! `01/05/24, 09:00:00 AM EST`. The timestamp is stored verbatim; it is only
//! parsed when two of them need to be compared for the dedup window.
//!
//! # Format
//!
//! `%m/%d/%y, %I:%M:%S %p %Z`, i.e. month/day/two-digit-year, a 12-hour clock
//! time with an AM/PM marker, and a trailing timezone name. The timezone name
//! has to be present but plays no part in the comparison; two timestamps are
//! on the same day when their calendar dates match as written.
//!
//! # Usage
//!
//! ```rust
//! use keepintouch::utils::datetime::same_day;
//!
//! let morning = "01/05/24, 09:00:00 AM EST";
//! let evening = "01/05/24, 11:30:00 PM EST";
//! assert!(same_day(morning, evening).unwrap());
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Format of the date and time portion, without the timezone name
pub const CONTACT_DATETIME_FORMAT: &str = "%m/%d/%y, %I:%M:%S %p";

/// Errors that can occur while reading a contact timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    /// The string does not follow `%m/%d/%y, %I:%M:%S %p %Z`
    #[error("Invalid contact timestamp: '{input}' - expected format: MM/DD/YY, HH:MM:SS AM TZ")]
    InvalidFormat { input: String },

    /// The trailing timezone name is missing or not alphabetic
    #[error("Failed to parse timezone name from: '{input}'")]
    TimezoneParseError { input: String },
}

/// A parsed contact timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTimestamp {
    datetime: NaiveDateTime,
}

impl ContactTimestamp {
    /// Parse a contact timestamp, rejecting anything that deviates from the format
    pub fn parse(input: &str) -> Result<Self, DateTimeError> {
        let (datetime_part, zone) =
            input
                .rsplit_once(' ')
                .ok_or_else(|| DateTimeError::InvalidFormat {
                    input: input.to_string(),
                })?;

        if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DateTimeError::TimezoneParseError {
                input: input.to_string(),
            });
        }

        let datetime = NaiveDateTime::parse_from_str(datetime_part, CONTACT_DATETIME_FORMAT)
            .map_err(|_| DateTimeError::InvalidFormat {
                input: input.to_string(),
            })?;

        Ok(Self { datetime })
    }

    /// Calendar date of the contact
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}

/// Whether two contact timestamps fall on the same calendar day
///
/// Time of day and timezone name are ignored. Either side failing to parse is
/// an error; there is no fallback format.
pub fn same_day(a: &str, b: &str) -> Result<bool, DateTimeError> {
    let first = ContactTimestamp::parse(a)?;
    let second = ContactTimestamp::parse(b)?;
    Ok(first.date() == second.date())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    #[test]
    fn test_parse_contact_timestamp() {
        let ts = ContactTimestamp::parse("01/05/24, 09:15:30 PM EST").unwrap();
        assert_eq!(ts.date().year(), 2024);
        assert_eq!(ts.date().month(), 1);
        assert_eq!(ts.date().day(), 5);
        assert_eq!(ts.datetime().hour(), 21);
        assert_eq!(ts.datetime().minute(), 15);
        assert_eq!(ts.datetime().second(), 30);
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = ContactTimestamp::parse("03/10/24, 12:00:00 AM UTC").unwrap();
        let noon = ContactTimestamp::parse("03/10/24, 12:00:00 PM UTC").unwrap();
        assert_eq!(midnight.datetime().hour(), 0);
        assert_eq!(noon.datetime().hour(), 12);
    }

    #[rstest]
    #[case("01/05/24, 09:00:00 AM EST", "01/05/24, 11:59:59 PM EST", true)]
    #[case("01/05/24, 09:00:00 AM EST", "01/05/24, 09:00:00 AM PST", true)]
    #[case("01/05/24, 11:59:59 PM EST", "01/06/24, 12:00:00 AM EST", false)]
    #[case("01/05/24, 09:00:00 AM EST", "01/05/25, 09:00:00 AM EST", false)]
    #[case("12/31/23, 10:00:00 PM GMT", "01/01/24, 01:00:00 AM GMT", false)]
    fn test_same_day(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        assert_eq!(same_day(a, b).unwrap(), expected);
    }

    #[rstest]
    #[case("2024-01-05T09:00:00Z")]
    #[case("01/05/24 09:00:00 AM EST")]
    #[case("01/05/2024, 09:00:00 AM EST")]
    #[case("13/05/24, 09:00:00 AM EST")]
    #[case("01/05/24, 13:00:00 AM EST")]
    #[case("01/05/24, 09:00:00 AM")]
    #[case("")]
    fn test_invalid_format(#[case] input: &str) {
        assert!(matches!(
            ContactTimestamp::parse(input),
            Err(DateTimeError::InvalidFormat { .. })
        ));
    }

    #[rstest]
    #[case("01/05/24, 09:00:00 AM E5T")]
    #[case("01/05/24, 09:00:00 AM ")]
    fn test_missing_timezone_name(#[case] input: &str) {
        assert!(matches!(
            ContactTimestamp::parse(input),
            Err(DateTimeError::TimezoneParseError { .. })
        ));
    }

    #[test]
    fn test_same_day_propagates_parse_error() {
        let err = same_day("01/05/24, 09:00:00 AM EST", "yesterday").unwrap_err();
        assert_eq!(
            err,
            DateTimeError::InvalidFormat {
                input: "yesterday".to_string()
            }
        );
    }
}
