//! parsing and stepping of dates read from a GTFS archive, which (should) have
//! yyyymmdd format.
use chrono::{Days, NaiveDate};

use super::ServiceDateError;

pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";
pub const SERVICE_DATE_FORMAT: &str = "%Y-%m-%d";

/// parses a raw GTFS date. no pre-validation happens here, a malformed
/// value is an error for the caller to propagate.
pub fn parse_gtfs_date(value: &str) -> Result<NaiveDate, ServiceDateError> {
    // chrono skips whitespace ahead of numeric fields, so digits are checked here
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceDateError::MalformedDateError {
            value: value.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(value, GTFS_DATE_FORMAT).map_err(|source| {
        ServiceDateError::MalformedDateError {
            value: value.to_string(),
            source: Some(source),
        }
    })
}

/// moves a date forward by some number of days.
pub fn step_date(date: NaiveDate, offset_days: u64) -> Result<NaiveDate, ServiceDateError> {
    date.checked_add_days(Days::new(offset_days))
        .ok_or(ServiceDateError::DateOverflow { date, offset_days })
}
