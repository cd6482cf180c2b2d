//! Hire date parsing and ISO rendering.
//!
//! Dates are read in a single locale: numeric forms are month-first (`03/15/2020` is March 15).
//! Time-of-day parts are accepted on ISO date-times and discarded.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::columns::HIRE_DATE;
use crate::types::{DataSet, DataType, Value};

use super::INVALID_DATE;

/// Date-only layouts, tried in order. Two-digit years come before four-digit ones so `20` is
/// never read as the year 0020.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%b-%d-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%A %B %d %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Offset-carrying date-times that are not strict RFC 3339.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Parse a calendar date from one of the accepted layouts.
///
/// Date-times with a `Z` or UTC offset keep the calendar date as written, in their own offset.
/// Returns `None` for empty or unrecognized input, impossible dates (`02/30/2020`), a weekday
/// that does not match the date, and years that do not render as four digits.
pub fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let four_digit_year = |d: &NaiveDate| (1000..=9999).contains(&d.year());
    parse_compact(s)
        .filter(four_digit_year)
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .find(four_digit_year)
        })
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
                .find(four_digit_year)
        })
        .or_else(|| parse_with_offset(s).filter(four_digit_year))
}

/// RFC 3339 (`2020-03-15T08:30:00Z`, `...+02:00`) and its space-separated variants.
fn parse_with_offset(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .or_else(|| {
            OFFSET_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        })
        .map(|dt| dt.date_naive())
}

/// `YYYYMMDD` with no separators.
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = s[0..4].parse().ok()?;
    let month = s[4..6].parse().ok()?;
    let day = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a hire date as `YYYY-MM-DD`, or [`INVALID_DATE`].
pub fn normalize_hire_date(raw: &str) -> String {
    match parse_hire_date(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Normalize every Hire_Date cell. Missing cells are invalid.
pub fn normalize_dates(dataset: DataSet) -> DataSet {
    let Some(idx) = dataset.schema.index_of(HIRE_DATE) else {
        return dataset;
    };
    dataset
        .map_column(idx, |v| match v {
            Value::Null => Value::text(INVALID_DATE),
            other => Value::Utf8(normalize_hire_date(&other.to_string())),
        })
        .with_column_type(idx, DataType::Utf8)
}
