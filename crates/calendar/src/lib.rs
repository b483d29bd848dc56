//! # stride-calendar
//!
//! Pure ISO-8601 week arithmetic for season planning.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"iso_week_number()"| B["week 1..=53"]
//!     A -->|"WeekRef::containing()"| C["WeekRef"]
//!     C -->|".next()"| C
//!     C -->|".date_of(TrainingDay)"| A
//!     D["SeasonConfig"] -->|".window(today)"| E["(start, end)"]
//!     E -->|"season_weeks()"| F["Vec of WeekRef"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use stride_calendar::{TrainingDay, WeekRef, date_for_week_and_day, season_weeks};
//!
//! let d = date_for_week_and_day(2025, 34, TrainingDay::MONDAY).unwrap();
//! assert_eq!(d, NaiveDate::from_ymd_opt(2025, 8, 18).unwrap());
//!
//! let start = WeekRef::new(2025, 52).unwrap();
//! let end = WeekRef::new(2026, 2).unwrap();
//! let weeks = season_weeks(start, end).unwrap();
//! assert_eq!(weeks.len(), 3);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `iso` | ISO week numbering, weeks per year, Monday of week 1 |
//! | `week` | `WeekRef` (year, week) with rollover |
//! | `day` | Sunday-first `TrainingDay` |
//! | `dates` | (week, day) to date resolution |
//! | `season` | Season window and week enumeration |
//! | `error` | Error types |

mod dates;
mod day;
mod error;
mod iso;
mod season;
mod week;

pub use dates::{date_for_week_and_day, training_dates_for_week};
pub use day::TrainingDay;
pub use error::CalendarError;
pub use iso::{iso_week_number, max_week_in_year, monday_of_week1};
pub use season::{EARLIEST_START_WEEK, SEASON_END_WEEK, SeasonConfig, season_weeks, start_week};
pub use week::WeekRef;
