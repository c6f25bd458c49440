use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
}

/// Parses a date of birth from any of the accepted spellings.
///
/// Tried in order: RFC 3339 timestamp with offset, bare `YYYY-MM-DD`,
/// timestamp with a literal `Z`, and finally whatever precedes the first `T`.
/// For offset timestamps the calendar date is the one local to that offset.
/// Every form starts with a zero-padded `YYYY-MM-DD`; timestamps need an
/// uppercase `T` separator and an uppercase `Z` when they use one.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    if is_timestamp(value) {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Ok(timestamp.date_naive());
        }
    }

    if is_iso_date(value) {
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Ok(date);
        }
    }

    if is_timestamp(value) {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, UTC_TIMESTAMP_FORMAT) {
            return Ok(timestamp.date());
        }
    }

    if let Some((date_part, _)) = value.split_once('T') {
        if is_iso_date(date_part) {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
                return Ok(date);
            }
        }
    }

    Err(DateParseError::InvalidDateFormat(value.to_string()))
}

/// Exactly `DDDD-DD-DD`. chrono alone would also take unpadded fields and
/// leading whitespace.
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn is_timestamp(value: &str) -> bool {
    value.get(..10).is_some_and(is_iso_date)
        && value.as_bytes().get(10) == Some(&b'T')
        && !value.ends_with('z')
}

/// Formats a date the way it is stored and returned: `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Age in whole years as of the local current date.
pub fn calculate_age(dob: NaiveDate) -> i32 {
    calculate_age_on(dob, Local::now().date_naive())
}

/// Age in whole years as of `today`.
///
/// The birthday check compares day-of-year ordinals, so a leap year on either
/// side can shift the result by one around late February. Callers depend on
/// this exact rule; keep it.
pub fn calculate_age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - dob.year();
    if today.ordinal() < dob.ordinal() {
        years -= 1;
    }
    years
}
