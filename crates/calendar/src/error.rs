//! Error types for the stride-calendar crate.

/// Error type for all fallible operations in the stride-calendar crate.
///
/// Covers ISO week numbers that do not exist in a given year, training-day
/// values outside the Sunday-first `0..=6` range, and dates that fall
/// outside the range representable by `chrono::NaiveDate`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a week number is not a valid ISO week for its year.
    #[error("invalid ISO week {week} for year {year} (must be 1..={max})")]
    InvalidWeek {
        /// The year the week was checked against.
        year: i32,
        /// The invalid week number.
        week: u32,
        /// The last ISO week of `year` (52 or 53).
        max: u32,
    },

    /// Returned when a season bound is not a plausible week number at all.
    #[error("invalid season week: {week} (must be 1..=53)")]
    InvalidSeasonWeek {
        /// The invalid week number.
        week: u32,
    },

    /// Returned when a training day number is outside 0..=6.
    #[error("invalid training day: {day} (must be 0..=6, 0 = Sunday)")]
    InvalidTrainingDay {
        /// The invalid day number.
        day: u8,
    },

    /// Returned when a training day name cannot be recognised.
    #[error("unknown training day: {name:?}")]
    UnknownTrainingDay {
        /// The unparseable input.
        name: String,
    },

    /// Returned when date arithmetic leaves the supported calendar range.
    #[error("date out of range near year {year}")]
    DateOutOfRange {
        /// The year being processed when the overflow happened.
        year: i32,
    },
}
