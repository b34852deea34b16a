//! Inclusive calendar date ranges and the range validator.
//!
//! Both ends of a [`DateRange`] are booked days, so a range ending on day D
//! and another starting on day D share D and overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// An inclusive `[start, end]` range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range without validation. A reversed range contains no dates.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Two ranges overlap iff `a.start <= b.end && b.start <= a.end`.
    ///
    /// Shared boundary dates count as overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of dates in the range, zero when reversed.
    pub fn len_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Every date of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Validate a requested date range against `today`.
///
/// # Errors
/// Returns `BookingError::InvalidRange` if `start` is not strictly after
/// `today`, or if `end` is before `start`. A single-day range is valid.
pub fn validate_range(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Result<DateRange> {
    if start <= today {
        return Err(BookingError::InvalidRange(format!(
            "start date {start} must be after {today}"
        )));
    }
    if end < start {
        return Err(BookingError::InvalidRange(format!(
            "end date {end} is before start date {start}"
        )));
    }
    Ok(DateRange::new(start, end))
}
