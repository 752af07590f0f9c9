//! Query currencies with store-key resolution.
//!
//! Each currency the engine can answer for maps to one backing table key in
//! the snapshot store (`"usd_swaps"`, `"eur_swaps"`, ...). An unknown
//! currency code fails at parse time, before any store access.

use std::fmt;
use std::str::FromStr;

use super::error::SelectorError;

/// The underlying currency of a swaps query.
///
/// Resolves to the key of the backing table in the snapshot store. The set
/// of supported currencies is fixed by the reference data feed.
///
/// # Variants
/// - `USD`: United States Dollar
/// - `EUR`: Euro
/// - `GBP`: British Pound Sterling
/// - `JPY`: Japanese Yen
///
/// # Examples
///
/// ```
/// use swaps_core::types::Currency;
///
/// let usd = Currency::USD;
/// assert_eq!(usd.code(), "USD");
/// assert_eq!(usd.store_key(), "usd_swaps");
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Currency {
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
}

impl Currency {
    /// All supported currencies, in canonical order.
    pub const ALL: [Currency; 4] = [Currency::USD, Currency::EUR, Currency::GBP, Currency::JPY];

    /// Returns the ISO 4217 three-letter currency code.
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Currency;
    ///
    /// assert_eq!(Currency::GBP.code(), "GBP");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Returns the backing table key in the snapshot store.
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Currency;
    ///
    /// assert_eq!(Currency::JPY.store_key(), "jpy_swaps");
    /// ```
    pub fn store_key(&self) -> String {
        format!("{}_swaps", self.code().to_lowercase())
    }
}

impl FromStr for Currency {
    type Err = SelectorError;

    /// Parses an ISO 4217 currency code (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use swaps_core::types::Currency;
    ///
    /// let usd: Currency = "USD".parse().unwrap();
    /// assert_eq!(usd, Currency::USD);
    ///
    /// // Unknown currency returns an error
    /// let result: Result<Currency, _> = "CHF".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, SelectorError> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(SelectorError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as the ISO 4217 code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
