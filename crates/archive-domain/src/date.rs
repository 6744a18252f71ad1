//! Partial publication dates
//!
//! Bibliography exports carry dates as free text with optional month and day.
//! Upstream parsers use [`parse_date`] to resolve a year before a record is
//! accepted; records without one never reach aggregation.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref YEAR_IN_TEXT: Regex = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
    static ref BARE_YEAR: Regex = Regex::new(r"^\d{4}$").unwrap();
}

/// Date parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Empty date string")]
    Empty,

    #[error("No year found in date: {0}")]
    NoYear(String),
}

/// A date where month and day may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    /// Sort key with unknown parts as 0, so partial dates sort first within
    /// their year or month.
    pub fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
    }
}

/// Parse a date string into year, month and day.
///
/// Accepts `YYYY/MM/DD`, `YYYY-MM-DD`, `YYYY/MM`, `YYYY-MM` and `YYYY`, then
/// falls back to the first 19xx/20xx year appearing anywhere in the text.
pub fn parse_date(input: &str) -> Result<PartialDate, DateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DateError::Empty);
    }

    for fmt in ["%Y/%m/%d", "%Y-%m-%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(PartialDate {
                year: date.year(),
                month: Some(date.month()),
                day: Some(date.day()),
            });
        }
    }

    for (sep, fmt) in [('/', "%Y/%m/%d"), ('-', "%Y-%m-%d")] {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{}{}01", input, sep), fmt) {
            return Ok(PartialDate {
                year: date.year(),
                month: Some(date.month()),
                day: None,
            });
        }
    }

    if BARE_YEAR.is_match(input) {
        if let Ok(year) = input.parse() {
            return Ok(PartialDate {
                year,
                month: None,
                day: None,
            });
        }
    }

    YEAR_IN_TEXT
        .find(input)
        .and_then(|m| m.as_str().parse().ok())
        .map(|year| PartialDate {
            year,
            month: None,
            day: None,
        })
        .ok_or_else(|| DateError::NoYear(input.to_string()))
}
