//! Season window resolution and week enumeration.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::CalendarError;
use crate::iso::{iso_week_number, max_week_in_year};
use crate::week::WeekRef;

/// The season never starts before this ISO week.
pub const EARLIEST_START_WEEK: u32 = 34;

/// The season ends with this ISO week (inclusive) of its final year.
pub const SEASON_END_WEEK: u32 = 24;

/// Returns the week the season starts in `year`.
///
/// For the year of `today` this is `max(iso_week(today), earliest)`, so
/// weeks that have already passed are never scheduled. For any other year
/// it is simply `earliest`.
pub fn start_week(year: i32, today: NaiveDate, earliest: u32) -> u32 {
    if year == today.year() {
        iso_week_number(today).max(earliest)
    } else {
        earliest
    }
}

/// Enumerates every ISO week from `start` through `end`, inclusive.
///
/// The walk rolls over to week 1 of the next year after the last week of
/// the current one (52 or 53), so the result is strictly increasing with
/// no gaps. Returns an empty vector when `start > end`.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] at the edge of the supported
/// calendar.
pub fn season_weeks(start: WeekRef, end: WeekRef) -> Result<Vec<WeekRef>, CalendarError> {
    let mut weeks = Vec::new();
    let mut current = start;
    while current <= end {
        weeks.push(current);
        current = current.next()?;
    }
    Ok(weeks)
}

/// Configuration of the season window.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stride_calendar::SeasonConfig;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let (start, end) = SeasonConfig::default().window(today).unwrap();
/// assert_eq!(start.to_string(), "2025-W34");
/// assert_eq!(end.to_string(), "2026-W24");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonConfig {
    /// Earliest week of the start year the season may begin in.
    earliest_start_week: u32,
    /// Last week (inclusive) of the end year.
    end_week: u32,
    /// Fixed end year; `None` means the year after the start year.
    end_year: Option<i32>,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            earliest_start_week: EARLIEST_START_WEEK,
            end_week: SEASON_END_WEEK,
            end_year: None,
        }
    }
}

impl SeasonConfig {
    /// Sets the earliest start week.
    pub fn with_earliest_start_week(mut self, week: u32) -> Self {
        self.earliest_start_week = week;
        self
    }

    /// Sets the final week of the season.
    pub fn with_end_week(mut self, week: u32) -> Self {
        self.end_week = week;
        self
    }

    /// Pins the season to end in a fixed year instead of the year after
    /// the start year.
    pub fn with_end_year(mut self, year: Option<i32>) -> Self {
        self.end_year = year;
        self
    }

    /// Returns the earliest start week.
    pub fn earliest_start_week(&self) -> u32 {
        self.earliest_start_week
    }

    /// Returns the final week of the season.
    pub fn end_week(&self) -> u32 {
        self.end_week
    }

    /// Returns the fixed end year, if any.
    pub fn end_year(&self) -> Option<i32> {
        self.end_year
    }

    /// Validates this configuration.
    ///
    /// Both week bounds must lie in 1..=53. Whether week 53 exists is only
    /// known once a year is attached, see [`SeasonConfig::window`].
    pub fn validate(&self) -> Result<(), CalendarError> {
        for week in [self.earliest_start_week, self.end_week] {
            if !(1..=53).contains(&week) {
                return Err(CalendarError::InvalidSeasonWeek { week });
            }
        }
        Ok(())
    }

    /// Resolves the `(start, end)` weeks of the season generated on `today`.
    ///
    /// The start year is `today`'s calendar year. The start week is
    /// [`start_week`], clamped to the last ISO week of that year (early
    /// January dates can still report week 53 of the previous year).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the configuration is invalid or the end
    /// week does not exist in the end year.
    pub fn window(&self, today: NaiveDate) -> Result<(WeekRef, WeekRef), CalendarError> {
        self.validate()?;
        let year = today.year();
        let week = start_week(year, today, self.earliest_start_week).min(max_week_in_year(year)?);
        let start = WeekRef::new(year, week)?;
        let end = WeekRef::new(self.end_year.unwrap_or(year + 1), self.end_week)?;
        debug!(%start, %end, "resolved season window");
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wk(y: i32, w: u32) -> WeekRef {
        WeekRef::new(y, w).unwrap()
    }

    #[test]
    fn start_week_before_34() {
        assert_eq!(start_week(2025, date(2025, 3, 1), 34), 34);
    }

    #[test]
    fn start_week_mid_season() {
        // 2025-10-15 is in week 42.
        assert_eq!(start_week(2025, date(2025, 10, 15), 34), 42);
    }

    #[test]
    fn start_week_other_year() {
        assert_eq!(start_week(2026, date(2025, 10, 15), 34), 34);
    }

    #[test]
    fn season_weeks_single() {
        let w = wk(2025, 40);
        assert_eq!(season_weeks(w, w).unwrap(), vec![w]);
    }

    #[test]
    fn season_weeks_empty_when_reversed() {
        assert!(season_weeks(wk(2026, 30), wk(2026, 24)).unwrap().is_empty());
    }

    #[test]
    fn season_weeks_default_2025() {
        let weeks = season_weeks(wk(2025, 34), wk(2026, 24)).unwrap();
        // 34..=52 of 2025 (19) + 1..=24 of 2026 (24).
        assert_eq!(weeks.len(), 43);
        assert_eq!(weeks[0], wk(2025, 34));
        assert_eq!(weeks[18], wk(2025, 52));
        assert_eq!(weeks[19], wk(2026, 1));
        assert_eq!(*weeks.last().unwrap(), wk(2026, 24));
    }

    #[test]
    fn season_weeks_long_year() {
        let weeks = season_weeks(wk(2026, 34), wk(2027, 24)).unwrap();
        // 34..=53 of 2026 (20) + 1..=24 of 2027 (24).
        assert_eq!(weeks.len(), 44);
        assert_eq!(weeks[19], wk(2026, 53));
        assert_eq!(weeks[20], wk(2027, 1));
    }

    #[test]
    fn default_config() {
        let cfg = SeasonConfig::default();
        assert_eq!(cfg.earliest_start_week(), 34);
        assert_eq!(cfg.end_week(), 24);
        assert_eq!(cfg.end_year(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_week_zero_and_54() {
        let cfg = SeasonConfig::default().with_earliest_start_week(0);
        assert_eq!(
            cfg.validate().unwrap_err(),
            CalendarError::InvalidSeasonWeek { week: 0 }
        );
        let cfg = SeasonConfig::default().with_end_week(54);
        assert_eq!(
            cfg.validate().unwrap_err(),
            CalendarError::InvalidSeasonWeek { week: 54 }
        );
    }

    #[test]
    fn window_mid_season() {
        let (start, end) = SeasonConfig::default()
            .window(date(2026, 10, 18))
            .unwrap();
        assert_eq!(start, wk(2026, 42));
        assert_eq!(end, wk(2027, 24));
    }

    #[test]
    fn window_fixed_end_year() {
        let (start, end) = SeasonConfig::default()
            .with_end_year(Some(2026))
            .window(date(2025, 1, 20))
            .unwrap();
        assert_eq!(start, wk(2025, 34));
        assert_eq!(end, wk(2026, 24));
    }

    #[test]
    fn window_clamps_week_53_of_previous_year() {
        // 2027-01-01 is in 2026-W53, but 2027 only has 52 weeks.
        let (start, _) = SeasonConfig::default()
            .window(date(2027, 1, 1))
            .unwrap();
        assert_eq!(start, wk(2027, 52));
    }
}
