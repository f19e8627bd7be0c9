//! Observation date handling.
//!
//! Dates are stored as `YYYY-MM-DD` text and filtered with string comparison,
//! so every date that reaches a query is first parsed and re-rendered in that
//! canonical form.

use chrono::{Months, NaiveDate};

use crate::error::{AppError, AppResult};

/// Storage and path format for observation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date supplied by a caller.
///
/// Only zero-padded `YYYY-MM-DD` calendar dates are accepted.
pub fn parse_request_date(raw: &str) -> AppResult<NaiveDate> {
    parse_strict(raw).ok_or_else(|| {
        AppError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

/// Parse a date read back from the dataset.
pub fn parse_stored_date(raw: &str) -> AppResult<NaiveDate> {
    parse_strict(raw)
        .ok_or_else(|| AppError::Internal(format!("Malformed observation date in dataset: '{raw}'")))
}

fn parse_strict(raw: &str) -> Option<NaiveDate> {
    // chrono tolerates signs, whitespace and unpadded fields; only the
    // canonical rendering compares correctly against stored text
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| format_date(*date) == raw)
}

#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Start of the trailing year ending at `latest`.
///
/// Steps back one calendar year; Feb 29 maps to Feb 28.
#[must_use]
pub fn one_year_before(latest: NaiveDate) -> NaiveDate {
    latest
        .checked_sub_months(Months::new(12))
        .unwrap_or(NaiveDate::MIN)
}

/// Validated inclusive date range for temperature statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn parse(start: &str, end: Option<&str>) -> AppResult<Self> {
        let start = parse_request_date(start)?;
        let end = end.map(parse_request_date).transpose()?;

        if let Some(end) = end
            && end < start
        {
            return Err(AppError::BadRequest(format!(
                "Start date {} is after end date {}",
                format_date(start),
                format_date(end)
            )));
        }

        Ok(Self { start, end })
    }
}
