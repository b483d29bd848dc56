//! ISO week reference with year context.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::day::TrainingDay;
use crate::error::CalendarError;
use crate::iso::{iso_year_week, max_week_in_year, monday_of_week1, shift_days};

/// An ISO-8601 week of a specific year.
///
/// Ordering is lexicographic on `(year, week)`, so comparisons stay correct
/// across year boundaries (`2025-W52 < 2026-W01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekRef {
    year: i32,
    week: u32,
}

impl WeekRef {
    /// Creates a new `WeekRef`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeek`] if `week` is not in
    /// `1..=max_week_in_year(year)`.
    pub fn new(year: i32, week: u32) -> Result<Self, CalendarError> {
        let max = max_week_in_year(year)?;
        if !(1..=max).contains(&week) {
            return Err(CalendarError::InvalidWeek { year, week, max });
        }
        Ok(Self { year, week })
    }

    /// Returns the ISO week that contains `date`.
    ///
    /// The ISO year can differ from `date.year()` for the first and last
    /// few days of a calendar year.
    pub fn containing(date: NaiveDate) -> Self {
        let (year, week) = iso_year_week(date);
        Self { year, week }
    }

    /// Returns the ISO year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the ISO week number.
    pub fn week(self) -> u32 {
        self.week
    }

    /// Returns the following week, rolling over to week 1 of the next year
    /// after the last week of this one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] at the edge of the
    /// supported calendar.
    pub fn next(self) -> Result<Self, CalendarError> {
        if self.week < max_week_in_year(self.year)? {
            Ok(Self {
                year: self.year,
                week: self.week + 1,
            })
        } else {
            Ok(Self {
                year: self.year + 1,
                week: 1,
            })
        }
    }

    /// Returns the Monday that starts this week.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] at the edge of the
    /// supported calendar.
    pub fn monday(self) -> Result<NaiveDate, CalendarError> {
        let week1 = monday_of_week1(self.year)?;
        shift_days(week1, 7 * (i64::from(self.week) - 1))
    }

    /// Returns the date of `day` within this week.
    ///
    /// Monday through Saturday sit 0 to 5 days after the Monday, and
    /// Sunday closes the week 6 days after it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] at the edge of the
    /// supported calendar.
    pub fn date_of(self, day: TrainingDay) -> Result<NaiveDate, CalendarError> {
        shift_days(self.monday()?, i64::from(day.days_from_monday()))
    }
}

impl fmt::Display for WeekRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}
