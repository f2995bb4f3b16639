//! Bulletin period identifiers (`YYYY-MMM`, e.g. `2024-Jan`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};

use crate::error::AppError;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month as used by the MSRC CVRF endpoint.
///
/// Always displays in canonical form: four-digit year, dash, title-cased
/// English month abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    /// Zero-based month index.
    month0: u32,
}

impl Period {
    /// Build from a year and a 1-based month.
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::config(format!("Invalid month number {month}.")));
        }
        if !(1000..=9999).contains(&year) {
            return Err(AppError::config(format!("Invalid year {year}.")));
        }
        Ok(Self {
            year,
            month0: month - 1,
        })
    }

    /// The current calendar month in local time.
    pub fn current() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month0: now.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{}", self.year, MONTHS[self.month0 as usize])
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::config(format!("Invalid period '{s}': expected YYYY-MMM (e.g. 2024-Jan)."));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month0 = MONTHS
            .iter()
            .position(|m| m.eq_ignore_ascii_case(month))
            .ok_or_else(invalid)?;

        Self::new(year, month0 as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_case() {
        let p: Period = "2024-jan".parse().unwrap();
        assert_eq!(p.to_string(), "2024-Jan");
        assert_eq!(p.month(), 1);

        let p: Period = "2023-DEC".parse().unwrap();
        assert_eq!(p.to_string(), "2023-Dec");
        assert_eq!(p.year(), 2023);
    }

    #[test]
    fn rejects_malformed_periods() {
        for raw in ["2024-13", "Jan-2024", "2024", "24-Jan", "2024-January", ""] {
            let err = raw.parse::<Period>().unwrap_err();
            assert_eq!(err.exit_code(), 2, "expected config error for {raw:?}");
        }
    }

    #[test]
    fn current_round_trips_through_display() {
        let now = Period::current();
        let reparsed: Period = now.to_string().parse().unwrap();
        assert_eq!(now, reparsed);
    }
}
