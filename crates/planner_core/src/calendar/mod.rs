//! Month arithmetic and the calendar grid builder.
//!
//! # Conventions
//! - Months are numbered `1..=12`.
//! - Weeks start on Sunday: column 0 is Sunday, column 6 is Saturday.
//! - Dates are naive local calendar dates.

mod grid;

pub use grid::{build_month_grid, Cell, DayCell, MAX_VISIBLE_EVENTS};

use crate::model::validation::ValidationError;
use chrono::{Datelike, Months, NaiveDate};

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// A validated (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// # Errors
    /// - `InvalidMonth` when `month` is not within `1..=12`.
    /// - `YearOutOfRange` when the month does not fit chrono's date range.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ValidationError::YearOutOfRange(year))?;
        NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
            .ok_or(ValidationError::YearOutOfRange(year))?;
        Ok(Self { first })
    }

    /// The month `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first.year()
    }

    pub fn month(self) -> u32 {
        self.first.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Column of day 1 in a Sunday-first week (0..=6).
    pub fn first_weekday(self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Header label such as `June 2025`.
    pub fn label(self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The month before; stays put at the start of the supported range.
    pub fn previous(self) -> Self {
        self.shift(|first| first.checked_sub_months(Months::new(1)))
    }

    /// The month after; stays put at the end of the supported range.
    pub fn next(self) -> Self {
        self.shift(|first| first.checked_add_months(Months::new(1)))
    }

    /// Same month in another year.
    pub fn with_year(self, year: i32) -> Result<Self, ValidationError> {
        Self::new(year, self.month())
    }

    fn shift(self, step: impl FnOnce(NaiveDate) -> Option<NaiveDate>) -> Self {
        step(self.first)
            .and_then(|first| Self::new(first.year(), first.month()).ok())
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, is_leap_year, YearMonth};
    use crate::model::validation::ValidationError;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn february_follows_gregorian_leap_rule() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn days_in_month_agrees_with_chrono() {
        for year in [1899, 1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next_first = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
                };
                let expected = (next_first - first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn new_rejects_months_outside_range() {
        assert_eq!(YearMonth::new(2025, 0), Err(ValidationError::InvalidMonth(0)));
        assert_eq!(YearMonth::new(2025, 13), Err(ValidationError::InvalidMonth(13)));
        assert_eq!(
            YearMonth::new(i32::MAX, 1),
            Err(ValidationError::YearOutOfRange(i32::MAX))
        );
    }

    #[test]
    fn first_weekday_counts_from_sunday() {
        // 2025-06-01 is a Sunday, 2024-02-01 a Thursday.
        assert_eq!(YearMonth::new(2025, 6).unwrap().first_weekday(), 0);
        assert_eq!(YearMonth::new(2024, 2).unwrap().first_weekday(), 4);
        // 2023-07-01 is a Saturday.
        assert_eq!(YearMonth::new(2023, 7).unwrap().first_weekday(), 6);
    }

    #[test]
    fn navigation_wraps_across_years() {
        let january = YearMonth::new(2025, 1).unwrap();
        let previous = january.previous();
        assert_eq!((previous.year(), previous.month()), (2024, 12));
        assert_eq!(previous.next(), january);
        assert_eq!(january.with_year(2030).unwrap().year(), 2030);
        assert_eq!(january.label(), "January 2025");
    }

    #[test]
    fn containing_finds_first_of_month() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let month = YearMonth::containing(date);
        assert_eq!(month.first_day().day(), 1);
        assert_eq!(month, YearMonth::new(2025, 6).unwrap());
    }
}
