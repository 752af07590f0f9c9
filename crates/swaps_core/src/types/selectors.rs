//! Categorical query selectors.
//!
//! This module provides the typed enumerations a caller selects with:
//! - `SwapType` / `SwapTypeChoice` / `TypeFilter`: the swap-type dimension
//!   and its "Both" wire spelling, resolved to an explicit tagged filter
//! - `Tenor`: outright maturities, spreads, and butterfly spreads
//! - `Bucket`: maturity-range buckets for trading-volume distribution
//! - `Period`: the lookback window enumeration
//! - `VolumeStat`: notional vs PV01 volume measurement
//!
//! Every selector parses from its exact wire spelling and serialises back
//! to it; an unknown value is a [`SelectorError`] naming the token.
//! Declaration order is the canonical order used for deterministic output.

use std::fmt;
use std::str::FromStr;

use super::error::SelectorError;

/// A concrete swap-type category present in the reference data.
///
/// # Examples
///
/// ```
/// use swaps_core::types::SwapType;
///
/// let ois: SwapType = "OIS".parse().unwrap();
/// assert_eq!(ois.code(), "OIS");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum SwapType {
    /// Libor-referenced swaps
    Libor,
    /// Overnight indexed swaps
    #[serde(rename = "OIS")]
    Ois,
}

impl SwapType {
    /// Both swap types, in canonical order.
    pub const ALL: [SwapType; 2] = [SwapType::Libor, SwapType::Ois];

    /// Returns the wire spelling used in the reference data.
    pub fn code(&self) -> &'static str {
        match self {
            SwapType::Libor => "Libor",
            SwapType::Ois => "OIS",
        }
    }
}

impl FromStr for SwapType {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        match s {
            "Libor" => Ok(SwapType::Libor),
            "OIS" => Ok(SwapType::Ois),
            _ => Err(SelectorError::UnknownSwapType(s.to_string())),
        }
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The swap-type selector as it arrives from a caller.
///
/// `Both` is a wire-level convenience meaning "do not filter on swap type",
/// not a category of its own. Callers resolve it to a [`TypeFilter`] before
/// filtering, so the sentinel can never collide with a real category value.
///
/// # Examples
///
/// ```
/// use swaps_core::types::{SwapType, SwapTypeChoice, TypeFilter};
///
/// assert_eq!(SwapTypeChoice::Both.filter(), TypeFilter::All);
/// assert_eq!(SwapTypeChoice::Ois.filter(), TypeFilter::Only(SwapType::Ois));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum SwapTypeChoice {
    /// Libor swaps only
    Libor,
    /// OIS swaps only
    #[serde(rename = "OIS")]
    Ois,
    /// No swap-type filter
    Both,
}

impl SwapTypeChoice {
    /// Resolves the wire choice to an explicit filter.
    pub fn filter(&self) -> TypeFilter {
        match self {
            SwapTypeChoice::Libor => TypeFilter::Only(SwapType::Libor),
            SwapTypeChoice::Ois => TypeFilter::Only(SwapType::Ois),
            SwapTypeChoice::Both => TypeFilter::All,
        }
    }

    /// Returns the wire spelling of the choice.
    pub fn code(&self) -> &'static str {
        match self {
            SwapTypeChoice::Libor => "Libor",
            SwapTypeChoice::Ois => "OIS",
            SwapTypeChoice::Both => "Both",
        }
    }
}

impl FromStr for SwapTypeChoice {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        match s {
            "Libor" => Ok(SwapTypeChoice::Libor),
            "OIS" => Ok(SwapTypeChoice::Ois),
            "Both" => Ok(SwapTypeChoice::Both),
            _ => Err(SelectorError::UnknownSwapType(s.to_string())),
        }
    }
}

impl fmt::Display for SwapTypeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An explicit swap-type filter: either pass everything, or keep one type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    /// No filtering on the swap-type column.
    All,
    /// Keep only rows of the given swap type.
    Only(SwapType),
}

/// A swap curve point: an outright maturity, a spread, or a butterfly.
///
/// The wire spelling is the curve-point identifier used in the `metric`
/// column of the Interest Rates sheet (`"10"`, `"2s10s"`, ...). Declaration
/// order (outrights by maturity, then spreads, then butterflies) is the
/// canonical catalogue order.
///
/// # Examples
///
/// ```
/// use swaps_core::types::Tenor;
///
/// let tenor: Tenor = "2s10s".parse().unwrap();
/// assert_eq!(tenor.code(), "2s10s");
/// assert_eq!(tenor.label(), "2Y - 10Y Spread");
/// assert!(tenor.is_composite());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Tenor {
    /// 1-year outright
    #[serde(rename = "1")]
    Y1,
    /// 2-year outright
    #[serde(rename = "2")]
    Y2,
    /// 3-year outright
    #[serde(rename = "3")]
    Y3,
    /// 4-year outright
    #[serde(rename = "4")]
    Y4,
    /// 5-year outright
    #[serde(rename = "5")]
    Y5,
    /// 7-year outright
    #[serde(rename = "7")]
    Y7,
    /// 10-year outright
    #[serde(rename = "10")]
    Y10,
    /// 15-year outright
    #[serde(rename = "15")]
    Y15,
    /// 20-year outright
    #[serde(rename = "20")]
    Y20,
    /// 30-year outright
    #[serde(rename = "30")]
    Y30,
    /// 40-year outright
    #[serde(rename = "40")]
    Y40,
    /// 50-year outright
    #[serde(rename = "50")]
    Y50,
    /// 1-year vs 5-year spread
    #[serde(rename = "1s5s")]
    Spread1s5s,
    /// 2-year vs 10-year spread
    #[serde(rename = "2s10s")]
    Spread2s10s,
    /// 5-year vs 20-year spread
    #[serde(rename = "5s20s")]
    Spread5s20s,
    /// 2-year/5-year/10-year butterfly spread
    #[serde(rename = "2s5s10s")]
    Fly2s5s10s,
    /// 2-year/10-year/30-year butterfly spread
    #[serde(rename = "2s10s30s")]
    Fly2s10s30s,
}

impl Tenor {
    /// All tenors, in canonical catalogue order.
    pub const ALL: [Tenor; 17] = [
        Tenor::Y1,
        Tenor::Y2,
        Tenor::Y3,
        Tenor::Y4,
        Tenor::Y5,
        Tenor::Y7,
        Tenor::Y10,
        Tenor::Y15,
        Tenor::Y20,
        Tenor::Y30,
        Tenor::Y40,
        Tenor::Y50,
        Tenor::Spread1s5s,
        Tenor::Spread2s10s,
        Tenor::Spread5s20s,
        Tenor::Fly2s5s10s,
        Tenor::Fly2s10s30s,
    ];

    /// Returns the curve-point identifier used in the reference data.
    pub fn code(&self) -> &'static str {
        match self {
            Tenor::Y1 => "1",
            Tenor::Y2 => "2",
            Tenor::Y3 => "3",
            Tenor::Y4 => "4",
            Tenor::Y5 => "5",
            Tenor::Y7 => "7",
            Tenor::Y10 => "10",
            Tenor::Y15 => "15",
            Tenor::Y20 => "20",
            Tenor::Y30 => "30",
            Tenor::Y40 => "40",
            Tenor::Y50 => "50",
            Tenor::Spread1s5s => "1s5s",
            Tenor::Spread2s10s => "2s10s",
            Tenor::Spread5s20s => "5s20s",
            Tenor::Fly2s5s10s => "2s5s10s",
            Tenor::Fly2s10s30s => "2s10s30s",
        }
    }

    /// Returns the human-readable catalogue label.
    pub fn label(&self) -> &'static str {
        match self {
            Tenor::Y1 => "1Y",
            Tenor::Y2 => "2Y",
            Tenor::Y3 => "3Y",
            Tenor::Y4 => "4Y",
            Tenor::Y5 => "5Y",
            Tenor::Y7 => "7Y",
            Tenor::Y10 => "10Y",
            Tenor::Y15 => "15Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
            Tenor::Y40 => "40Y",
            Tenor::Y50 => "50Y",
            Tenor::Spread1s5s => "1Y - 5Y Spread",
            Tenor::Spread2s10s => "2Y - 10Y Spread",
            Tenor::Spread5s20s => "5Y - 20Y Spread",
            Tenor::Fly2s5s10s => "2Y - 5Y - 10Y Butterfly Spread",
            Tenor::Fly2s10s30s => "2Y - 10Y - 30Y Butterfly Spread",
        }
    }

    /// Returns true for spread and butterfly curve points.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Tenor::Spread1s5s
                | Tenor::Spread2s10s
                | Tenor::Spread5s20s
                | Tenor::Fly2s5s10s
                | Tenor::Fly2s10s30s
        )
    }
}

impl FromStr for Tenor {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        Tenor::ALL
            .iter()
            .find(|t| t.code() == s)
            .copied()
            .ok_or_else(|| SelectorError::UnknownTenor(s.to_string()))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A maturity-range bucket for trading-volume distribution.
///
/// The wire spelling is the `Bucket` column value of the Trading Data sheet
/// (`"0-1"`, `"7-10"`, ...). Declaration order is maturity order.
///
/// # Examples
///
/// ```
/// use swaps_core::types::Bucket;
///
/// let bucket: Bucket = "7-10".parse().unwrap();
/// assert_eq!(bucket.code(), "7-10");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Bucket {
    /// 0 to 1 year
    #[serde(rename = "0-1")]
    ZeroToOne,
    /// 1 to 3 years
    #[serde(rename = "1-3")]
    OneToThree,
    /// 3 to 4 years
    #[serde(rename = "3-4")]
    ThreeToFour,
    /// 4 to 5 years
    #[serde(rename = "4-5")]
    FourToFive,
    /// 5 to 7 years
    #[serde(rename = "5-7")]
    FiveToSeven,
    /// 7 to 10 years
    #[serde(rename = "7-10")]
    SevenToTen,
    /// 10 to 15 years
    #[serde(rename = "10-15")]
    TenToFifteen,
    /// 15 to 20 years
    #[serde(rename = "15-20")]
    FifteenToTwenty,
    /// 20 to 25 years
    #[serde(rename = "20-25")]
    TwentyToTwentyFive,
    /// 25 to 30 years
    #[serde(rename = "25-30")]
    TwentyFiveToThirty,
    /// 30 to 40 years
    #[serde(rename = "30-40")]
    ThirtyToForty,
    /// 40 to 50 years
    #[serde(rename = "40-50")]
    FortyToFifty,
}

impl Bucket {
    /// All buckets, in maturity order.
    pub const ALL: [Bucket; 12] = [
        Bucket::ZeroToOne,
        Bucket::OneToThree,
        Bucket::ThreeToFour,
        Bucket::FourToFive,
        Bucket::FiveToSeven,
        Bucket::SevenToTen,
        Bucket::TenToFifteen,
        Bucket::FifteenToTwenty,
        Bucket::TwentyToTwentyFive,
        Bucket::TwentyFiveToThirty,
        Bucket::ThirtyToForty,
        Bucket::FortyToFifty,
    ];

    /// Returns the bucket label used in the reference data.
    pub fn code(&self) -> &'static str {
        match self {
            Bucket::ZeroToOne => "0-1",
            Bucket::OneToThree => "1-3",
            Bucket::ThreeToFour => "3-4",
            Bucket::FourToFive => "4-5",
            Bucket::FiveToSeven => "5-7",
            Bucket::SevenToTen => "7-10",
            Bucket::TenToFifteen => "10-15",
            Bucket::FifteenToTwenty => "15-20",
            Bucket::TwentyToTwentyFive => "20-25",
            Bucket::TwentyFiveToThirty => "25-30",
            Bucket::ThirtyToForty => "30-40",
            Bucket::FortyToFifty => "40-50",
        }
    }
}

impl FromStr for Bucket {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        Bucket::ALL
            .iter()
            .find(|b| b.code() == s)
            .copied()
            .ok_or_else(|| SelectorError::UnknownBucket(s.to_string()))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The historical lookback window of a time-series query.
///
/// `OneYear` is the widest window the feed retains and means "no
/// truncation"; the month periods are trailing windows anchored at the
/// latest date present in the data, and `YearToDate` cuts at January 1 of
/// the anchor year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Period {
    /// Trailing one month
    #[serde(rename = "1m")]
    OneMonth,
    /// Trailing three months
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Trailing six months
    #[serde(rename = "6m")]
    SixMonths,
    /// Year to date
    #[serde(rename = "YTD")]
    YearToDate,
    /// Full retained history (no truncation)
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    /// Returns the wire spelling of the period.
    pub fn code(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::YearToDate => "YTD",
            Period::OneYear => "1y",
        }
    }

    /// Returns the trailing month count, if this is a month-window period.
    pub fn months(&self) -> Option<u32> {
        match self {
            Period::OneMonth => Some(1),
            Period::ThreeMonths => Some(3),
            Period::SixMonths => Some(6),
            Period::YearToDate | Period::OneYear => None,
        }
    }
}

impl FromStr for Period {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        match s {
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "6m" => Ok(Period::SixMonths),
            "YTD" => Ok(Period::YearToDate),
            "1y" => Ok(Period::OneYear),
            _ => Err(SelectorError::UnknownPeriod(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The volume measurement of a trading-data query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum VolumeStat {
    /// Total notional traded
    Notional,
    /// Dollar value of a one-basis-point change in the swap rate
    #[serde(rename = "PV01")]
    Pv01,
}

impl VolumeStat {
    /// Returns the wire spelling of the statistic.
    pub fn code(&self) -> &'static str {
        match self {
            VolumeStat::Notional => "Notional",
            VolumeStat::Pv01 => "PV01",
        }
    }

    /// Returns the backing column name in the Trading Data sheet.
    pub fn column(&self) -> &'static str {
        match self {
            VolumeStat::Notional => "notional",
            VolumeStat::Pv01 => "pv01",
        }
    }
}

impl FromStr for VolumeStat {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, SelectorError> {
        match s {
            "Notional" => Ok(VolumeStat::Notional),
            "PV01" => Ok(VolumeStat::Pv01),
            _ => Err(SelectorError::UnknownVolumeStat(s.to_string())),
        }
    }
}

impl fmt::Display for VolumeStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parses a comma-separated multi-selection into typed selectors.
///
/// Whitespace around elements is tolerated; an unknown element fails with
/// the element's own [`SelectorError`]; zero elements fail with
/// [`SelectorError::EmptySelection`]. Duplicates are preserved; membership
/// filtering makes them harmless.
///
/// # Examples
///
/// ```
/// use swaps_core::types::{Bucket, Tenor};
/// use swaps_core::types::selectors::parse_selection;
///
/// let tenors: Vec<Tenor> = parse_selection("2s10s,10").unwrap();
/// assert_eq!(tenors, vec![Tenor::Spread2s10s, Tenor::Y10]);
///
/// let buckets: Vec<Bucket> = parse_selection("7-10").unwrap();
/// assert_eq!(buckets, vec![Bucket::SevenToTen]);
/// ```
pub fn parse_selection<T>(s: &str) -> Result<Vec<T>, SelectorError>
where
    T: FromStr<Err = SelectorError>,
{
    let parsed = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(T::from_str)
        .collect::<Result<Vec<T>, SelectorError>>()?;
    if parsed.is_empty() {
        return Err(SelectorError::EmptySelection);
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // SwapType / SwapTypeChoice Tests
    // ========================================

    #[test]
    fn test_swap_type_parse() {
        assert_eq!("Libor".parse::<SwapType>().unwrap(), SwapType::Libor);
        assert_eq!("OIS".parse::<SwapType>().unwrap(), SwapType::Ois);
        assert!("Both".parse::<SwapType>().is_err());
        assert!("ois".parse::<SwapType>().is_err());
    }

    #[test]
    fn test_swap_type_choice_filter() {
        assert_eq!(SwapTypeChoice::Both.filter(), TypeFilter::All);
        assert_eq!(
            SwapTypeChoice::Libor.filter(),
            TypeFilter::Only(SwapType::Libor)
        );
        assert_eq!(SwapTypeChoice::Ois.filter(), TypeFilter::Only(SwapType::Ois));
    }

    #[test]
    fn test_swap_type_choice_parse() {
        assert_eq!("Both".parse::<SwapTypeChoice>().unwrap(), SwapTypeChoice::Both);
        assert!("Either".parse::<SwapTypeChoice>().is_err());
    }

    #[test]
    fn test_swap_type_ordering() {
        assert!(SwapType::Libor < SwapType::Ois);
    }

    // ========================================
    // Tenor Tests
    // ========================================

    #[test]
    fn test_tenor_parse_roundtrip() {
        for tenor in Tenor::ALL {
            let parsed: Tenor = tenor.code().parse().unwrap();
            assert_eq!(tenor, parsed);
        }
    }

    #[test]
    fn test_tenor_unknown() {
        match "11".parse::<Tenor>() {
            Err(SelectorError::UnknownTenor(code)) => assert_eq!(code, "11"),
            _ => panic!("Expected UnknownTenor error"),
        }
    }

    #[test]
    fn test_tenor_labels() {
        assert_eq!(Tenor::Y10.label(), "10Y");
        assert_eq!(Tenor::Spread2s10s.label(), "2Y - 10Y Spread");
        assert_eq!(Tenor::Fly2s10s30s.label(), "2Y - 10Y - 30Y Butterfly Spread");
    }

    #[test]
    fn test_tenor_composite() {
        assert!(!Tenor::Y1.is_composite());
        assert!(Tenor::Spread1s5s.is_composite());
        assert!(Tenor::Fly2s5s10s.is_composite());
    }

    #[test]
    fn test_tenor_canonical_order() {
        assert!(Tenor::Y1 < Tenor::Y50);
        assert!(Tenor::Y50 < Tenor::Spread1s5s);
        assert!(Tenor::Spread5s20s < Tenor::Fly2s5s10s);
    }

    #[test]
    fn test_tenor_serde_wire_spelling() {
        assert_eq!(serde_json::to_string(&Tenor::Y10).unwrap(), "\"10\"");
        assert_eq!(
            serde_json::from_str::<Tenor>("\"2s10s\"").unwrap(),
            Tenor::Spread2s10s
        );
    }

    // ========================================
    // Bucket Tests
    // ========================================

    #[test]
    fn test_bucket_parse_roundtrip() {
        for bucket in Bucket::ALL {
            let parsed: Bucket = bucket.code().parse().unwrap();
            assert_eq!(bucket, parsed);
        }
    }

    #[test]
    fn test_bucket_unknown() {
        match "50-60".parse::<Bucket>() {
            Err(SelectorError::UnknownBucket(code)) => assert_eq!(code, "50-60"),
            _ => panic!("Expected UnknownBucket error"),
        }
    }

    #[test]
    fn test_bucket_maturity_order() {
        assert!(Bucket::ZeroToOne < Bucket::SevenToTen);
        assert!(Bucket::SevenToTen < Bucket::FortyToFifty);
    }

    // ========================================
    // Period Tests
    // ========================================

    #[test]
    fn test_period_parse() {
        assert_eq!("1m".parse::<Period>().unwrap(), Period::OneMonth);
        assert_eq!("YTD".parse::<Period>().unwrap(), Period::YearToDate);
        assert_eq!("1y".parse::<Period>().unwrap(), Period::OneYear);
        assert!("2y".parse::<Period>().is_err());
        assert!("ytd".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_months() {
        assert_eq!(Period::OneMonth.months(), Some(1));
        assert_eq!(Period::ThreeMonths.months(), Some(3));
        assert_eq!(Period::SixMonths.months(), Some(6));
        assert_eq!(Period::YearToDate.months(), None);
        assert_eq!(Period::OneYear.months(), None);
    }

    // ========================================
    // VolumeStat Tests
    // ========================================

    #[test]
    fn test_volume_stat_parse() {
        assert_eq!("Notional".parse::<VolumeStat>().unwrap(), VolumeStat::Notional);
        assert_eq!("PV01".parse::<VolumeStat>().unwrap(), VolumeStat::Pv01);
        assert!("pv01".parse::<VolumeStat>().is_err());
    }

    #[test]
    fn test_volume_stat_column() {
        assert_eq!(VolumeStat::Notional.column(), "notional");
        assert_eq!(VolumeStat::Pv01.column(), "pv01");
    }

    // ========================================
    // Selection Parsing Tests
    // ========================================

    #[test]
    fn test_parse_selection_single() {
        let tenors: Vec<Tenor> = parse_selection("2s10s").unwrap();
        assert_eq!(tenors, vec![Tenor::Spread2s10s]);
    }

    #[test]
    fn test_parse_selection_list_with_whitespace() {
        let buckets: Vec<Bucket> = parse_selection("7-10, 10-15").unwrap();
        assert_eq!(buckets, vec![Bucket::SevenToTen, Bucket::TenToFifteen]);
    }

    #[test]
    fn test_parse_selection_unknown_element() {
        let result: Result<Vec<Tenor>, _> = parse_selection("2s10s,banana");
        match result {
            Err(SelectorError::UnknownTenor(code)) => assert_eq!(code, "banana"),
            _ => panic!("Expected UnknownTenor error"),
        }
    }

    #[test]
    fn test_parse_selection_empty() {
        let result: Result<Vec<Tenor>, _> = parse_selection(" , ");
        assert_eq!(result, Err(SelectorError::EmptySelection));
    }
}
