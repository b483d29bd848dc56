//! Resolution of (week, training day) pairs to calendar dates.

use chrono::NaiveDate;

use crate::day::TrainingDay;
use crate::error::CalendarError;
use crate::week::WeekRef;

/// Returns the calendar date of `day` in ISO week `week` of `year`.
///
/// Computed as the Monday of week 1, plus `7 * (week - 1)` days, plus the
/// day's offset from Monday (Sunday = +6).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` does not exist in
/// `year`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stride_calendar::{TrainingDay, date_for_week_and_day};
///
/// let d = date_for_week_and_day(2025, 34, TrainingDay::WEDNESDAY).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
/// ```
pub fn date_for_week_and_day(
    year: i32,
    week: u32,
    day: TrainingDay,
) -> Result<NaiveDate, CalendarError> {
    WeekRef::new(year, week)?.date_of(day)
}

/// Returns the dates of all `days` within `week`, sorted chronologically.
///
/// `days` may arrive in any order; a Sunday always sorts last because it
/// closes the ISO week.
pub fn training_dates_for_week(
    week: WeekRef,
    days: &[TrainingDay],
) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut dates = days
        .iter()
        .map(|&day| week.date_of(day))
        .collect::<Result<Vec<_>, _>>()?;
    dates.sort_unstable();
    Ok(dates)
}
