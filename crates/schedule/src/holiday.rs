//! Holiday-week exclusion.

use std::collections::BTreeSet;

use stride_calendar::WeekRef;
use tracing::debug;

use crate::error::ScheduleError;

/// School break weeks: autumn break (44), Christmas
/// (52 and 1) and Easter (15).
pub const DEFAULT_HOLIDAY_WEEKS: [u32; 4] = [44, 52, 1, 15];

/// Returns `true` if `week` is one of the default holiday weeks.
///
/// The holiday table is the same every year, so `year` does not affect
/// the answer.
pub fn is_holiday_week(week: u32, _year: i32) -> bool {
    DEFAULT_HOLIDAY_WEEKS.contains(&week)
}

/// A set of week numbers excluded from every season year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayWeeks {
    weeks: BTreeSet<u32>,
}

impl Default for HolidayWeeks {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_HOLIDAY_WEEKS.into_iter().collect(),
        }
    }
}

impl HolidayWeeks {
    /// Creates a holiday set from week numbers. Duplicates are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidHolidayWeek`] for a week outside
    /// 1..=53.
    pub fn new(weeks: impl IntoIterator<Item = u32>) -> Result<Self, ScheduleError> {
        let weeks: BTreeSet<u32> = weeks.into_iter().collect();
        if let Some(&week) = weeks.iter().find(|w| !(1..=53).contains(*w)) {
            return Err(ScheduleError::InvalidHolidayWeek { week });
        }
        Ok(Self { weeks })
    }

    /// A set with no holidays.
    pub fn none() -> Self {
        Self {
            weeks: BTreeSet::new(),
        }
    }

    /// Returns `true` if `week` falls on a holiday week number.
    pub fn contains(&self, week: WeekRef) -> bool {
        self.weeks.contains(&week.week())
    }

    /// Returns the holiday week numbers in ascending order.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().copied()
    }

    /// Drops holiday weeks from `weeks`, preserving order.
    pub fn filter(&self, weeks: &[WeekRef]) -> Vec<WeekRef> {
        let kept: Vec<WeekRef> = weeks.iter().copied().filter(|w| !self.contains(*w)).collect();
        debug!(
            n_weeks = weeks.len(),
            n_holidays = weeks.len() - kept.len(),
            "filtered holiday weeks"
        );
        kept
    }
}
