//! Error types for structured error handling.
//!
//! This module provides:
//! - `SelectorError`: Errors from parsing categorical query selectors
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Categorised selector parse errors.
///
/// A selector value outside the known enumeration (unexpected currency,
/// swap type, tenor, bucket, period, or volume stat) is a caller error,
/// reported with the offending token so the caller can diagnose it.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `UnknownSwapType`: Unknown swap type
/// - `UnknownTenor`: Unknown tenor or spread identifier
/// - `UnknownBucket`: Unknown maturity bucket
/// - `UnknownPeriod`: Unknown lookback period
/// - `UnknownVolumeStat`: Unknown volume statistic
/// - `EmptySelection`: A comma-separated selection with no elements
///
/// # Examples
/// ```
/// use swaps_core::types::SelectorError;
///
/// let err = SelectorError::UnknownTenor("9s99s".to_string());
/// assert_eq!(format!("{}", err), "Unknown tenor: 9s99s");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unknown swap type.
    #[error("Unknown swap type: {0}")]
    UnknownSwapType(String),

    /// Unknown tenor or spread identifier.
    #[error("Unknown tenor: {0}")]
    UnknownTenor(String),

    /// Unknown maturity bucket.
    #[error("Unknown bucket: {0}")]
    UnknownBucket(String),

    /// Unknown lookback period.
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Unknown volume statistic.
    #[error("Unknown volume stat: {0}")]
    UnknownVolumeStat(String),

    /// A comma-separated selection parsed to zero elements.
    #[error("Empty selection")]
    EmptySelection,
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse an ISO `YYYY-MM-DD` date string
///
/// # Examples
/// ```
/// use swaps_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2025, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2025-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
