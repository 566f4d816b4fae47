//! age.rs
//!
//! Whole-year spans between a start date and "today":
//!     2000-06-15 → 2024-06-15  = 24
//!     2000-06-16 → 2024-06-15  = 23
//!
//! This is the conventional "age in years" rule, not plain year subtraction.
//! The anniversary is compared on (month, day), so a start of Feb 29 only
//! completes a year once March 1 is reached in a common year.
//!
//! Raw text fields are validated here, at the boundary, and turned into a
//! `DateSpec`. Dates are built with `NaiveDate::from_ymd_opt`, which rejects
//! out-of-range months and days instead of rolling them over.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::error::{Result, TimelessError};

/// A start date as supplied by the caller, before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpec {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSpec {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse the `y`, `m`, `d` text fields.
    ///
    /// The year must be exactly four digits and may not be later than
    /// `today`'s year, taken as given with no trimming. A missing, empty or
    /// zero month/day falls back to 1.
    pub fn parse(
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self> {
        let year = parse_year(year, today)?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;
        Ok(Self { year, month, day })
    }

    pub fn to_date(self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            warn!(
                year = self.year,
                month = self.month,
                day = self.day,
                "rejected invalid calendar date"
            );
            TimelessError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            }
        })
    }
}

fn parse_year(raw: Option<&str>, today: NaiveDate) -> Result<i32> {
    let raw = raw.unwrap_or_default();
    let invalid = || {
        warn!(value = raw, "rejected year");
        TimelessError::InvalidYear {
            value: raw.to_string(),
        }
    };

    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = raw.parse().map_err(|_| invalid())?;
    if year < 1000 || year > today.year() {
        return Err(invalid());
    }

    Ok(year)
}

fn parse_component(raw: Option<&str>) -> Result<u32> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(1);
    }

    match raw.parse::<u32>() {
        Ok(0) => Ok(1),
        Ok(n) => Ok(n),
        Err(_) => {
            warn!(value = raw, "rejected month/day");
            Err(TimelessError::InvalidMonthOrDay {
                value: raw.to_string(),
            })
        }
    }
}

/// Returns the number of complete years between `start` and `today`.
///
/// A start later than `today` within the same year yields 0.
pub fn whole_years(start: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - start.year();

    // Anniversary not reached yet this year
    if (today.month(), today.day()) < (start.month(), start.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

/// Whole years elapsed from `spec` to `today`.
pub fn year_span(spec: DateSpec, today: NaiveDate) -> Result<u32> {
    let start = spec.to_date()?;
    let years = whole_years(start, today);
    debug!(%start, %today, years, "computed year span");
    Ok(years)
}

/// The single "now" used for one render, normalized to UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
