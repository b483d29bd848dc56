//! Error types for the stride-plan crate.

use stride_calendar::CalendarError;
use stride_schedule::ScheduleError;

/// Error type for all fallible operations in the stride-plan crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Returned when the request itself is unusable.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when no scheduled discipline has exercises for the age group.
    #[error("no content for age group {age_group:?}")]
    NoContentForAgeGroup {
        /// The requested age group.
        age_group: String,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when writing an export fails.
    #[error("export failed: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when JSON serialization fails.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Serializer message.
        reason: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Schedule error.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl From<std::io::Error> for PlanError {
    fn from(e: std::io::Error) -> Self {
        PlanError::Io {
            reason: e.to_string(),
        }
    }
}
