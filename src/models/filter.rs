//! Filter resolution: raw month/day tokens into unambiguous predicates.

use crate::error::{BikeshareError, BikeshareResult};
use crate::models::City;

/// Month abbreviations accepted by the month filter, index 0 = January.
/// The datasets only cover the first half of the year.
pub const MONTH_NAMES: [&str; 6] = ["JAN", "FEB", "MAR", "APR", "MAY", "JUN"];

/// Weekday abbreviations, index 0 = Monday.
pub const DAY_NAMES: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

fn month_index(token: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == token)
        .map(|i| i as u32 + 1)
}

fn day_index(token: &str) -> Option<u32> {
    DAY_NAMES.iter().position(|d| *d == token).map(|i| i as u32)
}

/// Resolved month constraint. Months are 1-based (1 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Single(u32),
    /// Inclusive span. Always stored low-to-high: a range typed in either
    /// endpoint order resolves to the same filter.
    Range(u32, u32),
}

impl MonthFilter {
    /// Parse a month token: `ALL`, a 3-letter abbreviation (Jan-Jun), or an
    /// `ABC-XYZ` range of two abbreviations. Case-insensitive and trimmed.
    ///
    /// # Errors
    /// Returns [`BikeshareError::InvalidFilter`] for any other token.
    pub fn parse(token: &str) -> BikeshareResult<Self> {
        let token = token.trim().to_uppercase();
        if token == "ALL" {
            return Ok(MonthFilter::All);
        }
        if let Some(idx) = month_index(&token) {
            return Ok(MonthFilter::Single(idx));
        }
        if let Some((lo_tok, hi_tok)) = token.split_once('-') {
            if let (Some(a), Some(b)) = (month_index(lo_tok), month_index(hi_tok)) {
                return Ok(MonthFilter::Range(a.min(b), a.max(b)));
            }
        }
        Err(BikeshareError::InvalidFilter(format!(
            "unknown month token '{}', expected ALL, Jan-Jun, or a range like Jan-Mar",
            token
        )))
    }

    /// Whether a calendar month (1-12) passes the filter.
    pub fn matches(&self, month: u32) -> bool {
        match *self {
            MonthFilter::All => true,
            MonthFilter::Single(m) => month == m,
            MonthFilter::Range(lo, hi) => (lo..=hi).contains(&month),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthFilter::All)
    }
}

impl std::fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            MonthFilter::All => f.write_str("ALL"),
            MonthFilter::Single(m) => f.write_str(MONTH_NAMES[m as usize - 1]),
            MonthFilter::Range(lo, hi) => write!(
                f,
                "{}-{}",
                MONTH_NAMES[lo as usize - 1],
                MONTH_NAMES[hi as usize - 1]
            ),
        }
    }
}

/// Resolved day-of-week constraint. Days are 0-based (0 = Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Single(u32),
    /// Mon-Fri.
    Weekdays,
    /// Sat-Sun.
    Weekend,
}

impl DayFilter {
    /// Parse a day token: `ALL`, a 3-letter abbreviation (Mon-Sun), `WK`
    /// for the working week, or `WN` for the weekend. Case-insensitive and
    /// trimmed.
    ///
    /// # Errors
    /// Returns [`BikeshareError::InvalidFilter`] for any other token.
    pub fn parse(token: &str) -> BikeshareResult<Self> {
        let token = token.trim().to_uppercase();
        match token.as_str() {
            "ALL" => Ok(DayFilter::All),
            "WK" => Ok(DayFilter::Weekdays),
            "WN" => Ok(DayFilter::Weekend),
            other => day_index(other).map(DayFilter::Single).ok_or_else(|| {
                BikeshareError::InvalidFilter(format!(
                    "unknown day token '{}', expected ALL, Mon-Sun, WK, or WN",
                    other
                ))
            }),
        }
    }

    /// Whether a weekday index (0 = Monday .. 6 = Sunday) passes the filter.
    pub fn matches(&self, weekday: u32) -> bool {
        match *self {
            DayFilter::All => true,
            DayFilter::Single(d) => weekday == d,
            DayFilter::Weekdays => weekday <= 4,
            DayFilter::Weekend => weekday == 5 || weekday == 6,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DayFilter::All)
    }
}

impl std::fmt::Display for DayFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            DayFilter::All => f.write_str("ALL"),
            DayFilter::Single(d) => f.write_str(DAY_NAMES[d as usize]),
            DayFilter::Weekdays => f.write_str("MON-FRI"),
            DayFilter::Weekend => f.write_str("SAT-SUN"),
        }
    }
}

/// One session's resolved filters, consumed by the loader.
///
/// Both filters may be non-`All` (AND semantics at load time); the
/// interactive flow only ever sets one of them per session.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    /// Resolve raw user tokens into a validated specification.
    ///
    /// # Errors
    /// Returns [`BikeshareError::InvalidFilter`] if any token is
    /// unrecognized.
    pub fn resolve(city: &str, month: &str, day: &str) -> BikeshareResult<Self> {
        Ok(Self {
            city: City::parse(city)?,
            month: MonthFilter::parse(month)?,
            day: DayFilter::parse(day)?,
        })
    }
}
