//! Date parsing and request window validation.
//!
//! Dates cross the API as `YYYY-MM-DD` strings. A request window is
//! inclusive on both ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire format for every date the service accepts or emits.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive `[start, end]` calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` lies inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono accepts unpadded fields (`2025-1-5`), so the length is checked
/// first to keep the format strict.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    if trimmed.len() != 10 {
        return Err(CoreError::MalformedDate(value.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CoreError::MalformedDate(value.to_string()))
}

/// Validate an inclusive window against ordering only.
pub fn ensure_ordered(start: NaiveDate, end: NaiveDate) -> Result<DateRange, CoreError> {
    if start > end {
        return Err(CoreError::InvalidRange(
            "Start date cannot be after the end date".to_string(),
        ));
    }
    Ok(DateRange { start, end })
}

/// Parse and validate a request window for a new forecast lookup.
///
/// Rejects malformed dates, `start > end`, and a start before `today`.
pub fn validate_date_range(
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<DateRange, CoreError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    let range = ensure_ordered(start, end)?;

    if range.start < today {
        return Err(CoreError::InvalidRange(
            "Start date cannot be in the past".to_string(),
        ));
    }

    Ok(range)
}
