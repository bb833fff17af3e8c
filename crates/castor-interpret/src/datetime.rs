//! Date and time parsing/formatting for the value interpreter.
//!
//! Raw export values use fixed vendor formats (`dd-mm-YYYY`,
//! `dd-mm-YYYY;HH:MM`, `HH:MM`); output formats come from the study
//! configuration and are arbitrary strftime strings, so formatting must
//! not panic on a bad directive.

use std::fmt::Write as _;

use castor_model::{CastorError, MissingReason, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format of date values in the export.
pub const EXPORT_DATE_FORMAT: &str = "%d-%m-%Y";
/// Format of datetime values in the export.
pub const EXPORT_DATETIME_FORMAT: &str = "%d-%m-%Y;%H:%M";
/// Format of time values in the export.
pub const EXPORT_TIME_FORMAT: &str = "%H:%M";

/// Format a datetime with a caller-supplied strftime string.
///
/// chrono reports invalid directives through `fmt::Error`, which
/// `to_string` would turn into a panic; rendering through `write!` keeps
/// this fallible.
pub fn format_datetime(dt: NaiveDateTime, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", dt.format(format))
        .map_err(|_| CastorError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// Format a time of day with a caller-supplied strftime string.
pub fn format_time(time: NaiveTime, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", time.format(format))
        .map_err(|_| CastorError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// January 1st of the reason's pseudo-year (2995-2999), formatted per
/// the study configuration.
pub fn format_pseudo_date(reason: MissingReason, format: &str) -> Result<String> {
    let date = NaiveDate::from_ymd_opt(reason.pseudo_year(), 1, 1)
        .expect("January 1st is a valid date");
    format_datetime(date.and_time(NaiveTime::MIN), format)
}

/// Interpret a non-missing raw date value.
///
/// Dates are exported as `dd-mm-YYYY` and reformatted with the study date
/// format. Some date fields carry a full timestamp instead; those are
/// re-emitted in the export datetime format verbatim, overriding the
/// configured format.
pub fn interpret_date_value(raw: &str, date_format: &str) -> Result<String> {
    match NaiveDate::parse_from_str(raw, EXPORT_DATE_FORMAT) {
        Ok(date) => format_datetime(date.and_time(NaiveTime::MIN), date_format),
        Err(_) => {
            let dt = NaiveDateTime::parse_from_str(raw, EXPORT_DATETIME_FORMAT)
                .map_err(|_| CastorError::InvalidDate(raw.to_string()))?;
            format_datetime(dt, EXPORT_DATETIME_FORMAT)
        }
    }
}

/// Interpret a non-missing raw datetime value.
///
/// Datetimes are exported as `dd-mm-YYYY;HH:MM`; a date-only value is
/// accepted as midnight.
pub fn interpret_datetime_value(raw: &str, datetime_format: &str) -> Result<String> {
    match NaiveDateTime::parse_from_str(raw, EXPORT_DATETIME_FORMAT) {
        Ok(dt) => format_datetime(dt, datetime_format),
        Err(_) => {
            let date = NaiveDate::parse_from_str(raw, EXPORT_DATE_FORMAT)
                .map_err(|_| CastorError::InvalidDate(raw.to_string()))?;
            format_datetime(date.and_time(NaiveTime::MIN), datetime_format)
        }
    }
}

/// Interpret a non-missing raw time value (`HH:MM`).
pub fn interpret_time_value(raw: &str, time_format: &str) -> Result<String> {
    let time = NaiveTime::parse_from_str(raw, EXPORT_TIME_FORMAT)
        .map_err(|_| CastorError::InvalidTime(raw.to_string()))?;
    format_time(time, time_format)
}

/// Interpret the date half of a numberdate value (`dd-mm-YYYY`).
pub fn interpret_numberdate_date(raw: &str, date_format: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(raw, EXPORT_DATE_FORMAT)
        .map_err(|_| CastorError::InvalidDate(raw.to_string()))?;
    format_datetime(date.and_time(NaiveTime::MIN), date_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_reformats() {
        assert_eq!(
            interpret_date_value("01-02-2020", "%Y-%m-%d").unwrap(),
            "2020-02-01"
        );
    }

    #[test]
    fn test_date_with_timestamp_keeps_export_format() {
        // format override: a timestamp in a date field is not reformatted
        assert_eq!(
            interpret_date_value("01-02-2020;13:37", "%Y-%m-%d").unwrap(),
            "01-02-2020;13:37"
        );
    }

    #[test]
    fn test_datetime_accepts_date_only() {
        assert_eq!(
            interpret_datetime_value("01-02-2020", "%Y-%m-%d %H:%M").unwrap(),
            "2020-02-01 00:00"
        );
        assert_eq!(
            interpret_datetime_value("01-02-2020;13:37", "%Y-%m-%d %H:%M").unwrap(),
            "2020-02-01 13:37"
        );
    }

    #[test]
    fn test_time_reformats() {
        assert_eq!(interpret_time_value("09:05", "%H.%M").unwrap(), "09.05");
    }

    #[test]
    fn test_malformed_values_fail() {
        assert!(interpret_date_value("2020-02-01", "%Y-%m-%d").is_err());
        assert!(interpret_time_value("25:00", "%H:%M").is_err());
        assert!(interpret_numberdate_date("01/02/2020", "%Y-%m-%d").is_err());
    }

    #[test]
    fn test_pseudo_date_is_deterministic() {
        let first = format_pseudo_date(MissingReason::NotDone, "%Y-%m-%d").unwrap();
        let second = format_pseudo_date(MissingReason::NotDone, "%Y-%m-%d").unwrap();
        assert_eq!(first, "2999-01-01");
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_format_string_is_an_error_not_a_panic() {
        let result = format_pseudo_date(MissingReason::NotAsked, "%Q");
        assert!(result.is_err());
    }
}
