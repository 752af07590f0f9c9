//! Time-index types for the query engine.
//!
//! This module provides `Date`, the single time type used for ordering,
//! windowing, and as the output row key. It is a thin wrapper around
//! `chrono::NaiveDate` that pins the wire format to strict ISO
//! `YYYY-MM-DD`, so formatted dates always compare exactly.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around `chrono::NaiveDate`.
///
/// Parsing accepts strict ISO `YYYY-MM-DD` only, and `Display` emits the
/// same format, so a formatted `Date` round-trips exactly. Ordering is
/// calendar order.
///
/// # Examples
///
/// ```
/// use swaps_core::types::Date;
///
/// let date = Date::from_ymd(2025, 4, 15).unwrap();
/// assert_eq!(date.to_string(), "2025-04-15");
///
/// let parsed: Date = "2025-04-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Lookback cutoffs clamp to the calendar
/// let end_of_may = Date::from_ymd(2025, 5, 31).unwrap();
/// assert_eq!(end_of_may.months_back(3), Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a `Date` from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2025)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.year(), 2024);
    ///
    /// assert!(Date::from_ymd(2025, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from strict ISO 8601 format (`YYYY-MM-DD`).
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Date;
    ///
    /// let date = Date::parse("2025-04-15").unwrap();
    /// assert_eq!(date.year(), 2025);
    ///
    /// assert!(Date::parse("15/04/2025").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the date N calendar months earlier, clamped to a valid day.
    ///
    /// Month arithmetic clamps to the end of the target month, matching
    /// calendar lookback semantics (May 31 minus 3 months is February 28).
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Date;
    ///
    /// let anchor = Date::from_ymd(2025, 4, 15).unwrap();
    /// assert_eq!(anchor.months_back(6), Date::from_ymd(2024, 10, 15).unwrap());
    /// ```
    pub fn months_back(&self, months: u32) -> Self {
        // checked_sub_months only fails outside chrono's representable
        // range, unreachable for reference-data dates.
        Date(
            self.0
                .checked_sub_months(Months::new(months))
                .unwrap_or(self.0),
        )
    }

    /// Returns January 1 of this date's year, the year-to-date anchor.
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Date;
    ///
    /// let date = Date::from_ymd(2025, 4, 15).unwrap();
    /// assert_eq!(date.start_of_year(), Date::from_ymd(2025, 1, 1).unwrap());
    /// ```
    pub fn start_of_year(&self) -> Self {
        // January 1 exists for every representable year.
        Date(NaiveDate::from_ymd_opt(self.0.year(), 1, 1).unwrap_or(self.0))
    }

    /// Returns the underlying `NaiveDate`.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats as ISO `YYYY-MM-DD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
