//! Session scheduling: holiday exclusion and discipline assignment.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`HolidayWeeks`] / [`is_holiday_week`] | Drop break weeks from a season |
//! | [`DisciplineSet`] | Ordered, unique discipline names |
//! | [`assign_disciplines`] | One discipline per session slot with minimum spacing |
//!
//! # Quick start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stride_schedule::{DEFAULT_MIN_SPACING, DisciplineSet, assign_discipline_names};
//!
//! let set = DisciplineSet::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let names = assign_discipline_names(10, &set, DEFAULT_MIN_SPACING, &mut rng);
//! assert_eq!(names.len(), 10);
//! ```
//!
//! All randomness goes through the caller's `rng`, so a seeded generator
//! reproduces an assignment exactly.

pub mod discipline;
pub mod error;
pub mod holiday;

pub use discipline::{
    DEFAULT_DISCIPLINES, DEFAULT_MIN_SPACING, DisciplineSet, assign_discipline_names,
    assign_disciplines,
};
pub use error::ScheduleError;
pub use holiday::{DEFAULT_HOLIDAY_WEEKS, HolidayWeeks, is_holiday_week};
