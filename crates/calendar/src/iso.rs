//! ISO-8601 week numbering.
//!
//! Week 1 of a year is the week containing that year's first Thursday.
//! Every computation here works on timezone-free [`NaiveDate`] values, so
//! there is no local-time day shift to correct for.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// Weekday number of Thursday when Monday is 1.
const THURSDAY: i32 = 4;

/// Computes the ISO-8601 week number of `date`.
///
/// The date is shifted to the Thursday of its Monday-started week, and
/// weeks are counted from the start of that Thursday's year. A late
/// December date can therefore land in week 1, and an early January date
/// in week 52 or 53 of the previous year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stride_calendar::iso_week_number;
///
/// let d = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap(); // Monday
/// assert_eq!(iso_week_number(d), 1);
/// ```
pub fn iso_week_number(date: NaiveDate) -> u32 {
    iso_year_week(date).1
}

/// Returns the ISO `(year, week)` pair that `date` belongs to.
pub(crate) fn iso_year_week(date: NaiveDate) -> (i32, u32) {
    let weekday = date.weekday().number_from_monday() as i32;
    let year = date.year();
    // Ordinal of the Thursday in the same week; may spill into either
    // neighbouring year.
    let thursday = date.ordinal() as i32 + THURSDAY - weekday;

    if thursday < 1 {
        let prev = year - 1;
        (prev, week_of_ordinal(days_in_year(prev) + thursday))
    } else if thursday > days_in_year(year) {
        (year + 1, 1)
    } else {
        (year, week_of_ordinal(thursday))
    }
}

/// Returns the number of ISO weeks in `year` (52 or 53).
///
/// Probes December 28 through 31 and keeps the largest week number seen
/// before any of them spills into week 1 of the following year. Falls back
/// to 52 if nothing was observed.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if December of `year` cannot be
/// represented.
pub fn max_week_in_year(year: i32) -> Result<u32, CalendarError> {
    let mut max_week = 0;
    for day in 28..=31 {
        let week = iso_week_number(ymd(year, 12, day)?);
        if week == 1 {
            break;
        }
        max_week = max_week.max(week);
    }
    Ok(if max_week == 0 { 52 } else { max_week })
}

/// Resolves the Monday that begins ISO week 1 of `year`.
///
/// January 4 always lies in week 1; January 1 is used instead if January 4
/// does not validate. The anchor is walked back to its Monday, with a
/// one-week forward correction if that Monday is still not in week 1.
/// The result may fall in the last days of December of `year - 1`.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the dates involved cannot be
/// represented.
pub fn monday_of_week1(year: i32) -> Result<NaiveDate, CalendarError> {
    let jan4 = ymd(year, 1, 4)?;
    let anchor = if iso_week_number(jan4) == 1 {
        jan4
    } else {
        ymd(year, 1, 1)?
    };

    let back = i64::from(anchor.weekday().num_days_from_monday());
    let mut monday = shift_days(anchor, -back)?;
    if iso_week_number(monday) != 1 {
        monday = shift_days(monday, 7)?;
    }
    Ok(monday)
}

/// Adds `days` (possibly negative) to `date`.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or(CalendarError::DateOutOfRange { year: date.year() })
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::DateOutOfRange { year })
}

fn week_of_ordinal(ordinal: i32) -> u32 {
    ((ordinal - 1) / 7 + 1) as u32
}

fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
