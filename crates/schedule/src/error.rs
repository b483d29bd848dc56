//! Error types for the stride-schedule crate.

/// Error type for all fallible operations in the stride-schedule crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Returned when a discipline set has no entries.
    #[error("discipline set is empty")]
    EmptyDisciplines,

    /// Returned when the same discipline name appears twice.
    #[error("duplicate discipline: {name:?}")]
    DuplicateDiscipline {
        /// The repeated name.
        name: String,
    },

    /// Returned when a discipline name is empty or whitespace.
    #[error("discipline name at position {index} is blank")]
    BlankDiscipline {
        /// Position of the blank name in the input.
        index: usize,
    },

    /// Returned when a holiday week number cannot be an ISO week.
    #[error("invalid holiday week: {week} (must be 1..=53)")]
    InvalidHolidayWeek {
        /// The invalid week number.
        week: u32,
    },
}
