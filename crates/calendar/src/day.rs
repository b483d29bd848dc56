//! Training-day selection in the Sunday-first convention.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A weekly training day, numbered `0..=6` with **0 = Sunday**.
///
/// This is the user-facing numbering. It is deliberately a separate type
/// from [`chrono::Weekday`], which is Monday-first like ISO week math.
/// Use [`TrainingDay::days_from_monday`] to place a training day inside an
/// ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrainingDay(u8);

/// Index `n` holds the weekday of `TrainingDay(n)`.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl TrainingDay {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Creates a training day from its Sunday-first number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTrainingDay`] if `day > 6`.
    pub fn new(day: u8) -> Result<Self, CalendarError> {
        if day > 6 {
            return Err(CalendarError::InvalidTrainingDay { day });
        }
        Ok(Self(day))
    }

    /// Converts from a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }

    /// Returns the Sunday-first number (0..=6).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the chrono weekday.
    pub fn weekday(self) -> Weekday {
        WEEKDAYS[usize::from(self.0)]
    }

    /// Offset of this day from the Monday that starts its ISO week.
    ///
    /// Sunday maps to 6; Monday through Saturday map to 0 through 5.
    pub fn days_from_monday(self) -> u32 {
        if self.0 == 0 { 6 } else { u32::from(self.0) - 1 }
    }
}

impl TryFrom<u8> for TrainingDay {
    type Error = CalendarError;

    fn try_from(day: u8) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<TrainingDay> for u8 {
    fn from(day: TrainingDay) -> Self {
        day.0
    }
}

impl FromStr for TrainingDay {
    type Err = CalendarError;

    /// Parses `"0"`..`"6"`, or an English or Swedish day name (full or
    /// three-letter form, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Self::new(n);
        }
        let day = match trimmed.to_lowercase().as_str() {
            "sun" | "sunday" | "sön" | "söndag" => 0,
            "mon" | "monday" | "mån" | "måndag" => 1,
            "tue" | "tuesday" | "tis" | "tisdag" => 2,
            "wed" | "wednesday" | "ons" | "onsdag" => 3,
            "thu" | "thursday" | "tor" | "torsdag" => 4,
            "fri" | "friday" | "fre" | "fredag" => 5,
            "sat" | "saturday" | "lör" | "lördag" => 6,
            _ => {
                return Err(CalendarError::UnknownTrainingDay {
                    name: s.to_string(),
                });
            }
        };
        Ok(Self(day))
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}
