//! Core selector, time, and error types.
//!
//! This module provides:
//! - `currency`: Query currencies with store-key resolution
//! - `selectors`: Categorical query selectors (swap type, tenor, bucket, period, volume stat)
//! - `time`: The `Date` time-index type
//! - `error`: Structured error types for selector parsing and date handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Currency`] from `currency`
//! - [`SwapType`], [`SwapTypeChoice`], [`TypeFilter`], [`Tenor`], [`Bucket`],
//!   [`Period`], [`VolumeStat`] from `selectors`
//! - [`Date`] from `time`
//! - [`SelectorError`], [`DateError`] from `error`

pub mod currency;
pub mod error;
pub mod selectors;
pub mod time;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use error::{DateError, SelectorError};
pub use selectors::{Bucket, Period, SwapType, SwapTypeChoice, Tenor, TypeFilter, VolumeStat};
pub use time::Date;
