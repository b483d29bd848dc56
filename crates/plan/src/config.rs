//! Plan generation configuration and request types.

use chrono::NaiveDate;
use stride_calendar::{SeasonConfig, TrainingDay};
use stride_schedule::{DEFAULT_MIN_SPACING, DisciplineSet, HolidayWeeks};

use crate::error::PlanError;

/// Exercises drawn per block.
pub const EXERCISES_PER_BLOCK: usize = 3;

/// Blocks per session.
pub const BLOCKS_PER_SESSION: u8 = 4;

/// Tunables for season plan generation.
///
/// # Example
///
/// ```
/// use stride_plan::PlanConfig;
///
/// let config = PlanConfig::default()
///     .with_exercises_per_block(2)
///     .with_min_spacing(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    /// Upper bound on exercises per block.
    exercises_per_block: usize,
    /// Number of blocks in each session, numbered from 1.
    blocks_per_session: u8,
    /// Minimum slot distance between two uses of a discipline.
    min_spacing: usize,
    /// Disciplines to rotate through, in fixed order.
    disciplines: DisciplineSet,
    /// Weeks without sessions.
    holidays: HolidayWeeks,
    /// Season window.
    season: SeasonConfig,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            exercises_per_block: EXERCISES_PER_BLOCK,
            blocks_per_session: BLOCKS_PER_SESSION,
            min_spacing: DEFAULT_MIN_SPACING,
            disciplines: DisciplineSet::default(),
            holidays: HolidayWeeks::default(),
            season: SeasonConfig::default(),
        }
    }
}

impl PlanConfig {
    /// Sets the number of exercises drawn per block.
    pub fn with_exercises_per_block(mut self, n: usize) -> Self {
        self.exercises_per_block = n;
        self
    }

    /// Sets the number of blocks per session.
    pub fn with_blocks_per_session(mut self, n: u8) -> Self {
        self.blocks_per_session = n;
        self
    }

    /// Sets the minimum discipline spacing.
    pub fn with_min_spacing(mut self, n: usize) -> Self {
        self.min_spacing = n;
        self
    }

    /// Sets the discipline rotation.
    pub fn with_disciplines(mut self, disciplines: DisciplineSet) -> Self {
        self.disciplines = disciplines;
        self
    }

    /// Sets the holiday weeks.
    pub fn with_holidays(mut self, holidays: HolidayWeeks) -> Self {
        self.holidays = holidays;
        self
    }

    /// Sets the season window configuration.
    pub fn with_season(mut self, season: SeasonConfig) -> Self {
        self.season = season;
        self
    }

    pub fn exercises_per_block(&self) -> usize {
        self.exercises_per_block
    }

    pub fn blocks_per_session(&self) -> u8 {
        self.blocks_per_session
    }

    pub fn min_spacing(&self) -> usize {
        self.min_spacing
    }

    pub fn disciplines(&self) -> &DisciplineSet {
        &self.disciplines
    }

    pub fn holidays(&self) -> &HolidayWeeks {
        &self.holidays
    }

    pub fn season(&self) -> &SeasonConfig {
        &self.season
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] if a block or exercise count is
    /// zero, or a calendar error for invalid season bounds.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.exercises_per_block < 1 {
            return Err(PlanError::InvalidConfig {
                reason: "exercises_per_block must be >= 1".to_string(),
            });
        }
        if self.blocks_per_session < 1 {
            return Err(PlanError::InvalidConfig {
                reason: "blocks_per_session must be >= 1".to_string(),
            });
        }
        self.season.validate()?;
        Ok(())
    }
}

/// What to generate: an age group, weekly training days, and the date the
/// plan is generated on (which fixes the season start).
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    age_group: String,
    training_days: Vec<TrainingDay>,
    today: NaiveDate,
}

impl PlanRequest {
    /// Creates a request. Training days may be given in any order.
    pub fn new(
        age_group: impl Into<String>,
        training_days: impl IntoIterator<Item = TrainingDay>,
        today: NaiveDate,
    ) -> Self {
        Self {
            age_group: age_group.into(),
            training_days: training_days.into_iter().collect(),
            today,
        }
    }

    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    pub fn training_days(&self) -> &[TrainingDay] {
        &self.training_days
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_calendar::CalendarError;

    #[test]
    fn defaults() {
        let cfg = PlanConfig::default();
        assert_eq!(cfg.exercises_per_block(), 3);
        assert_eq!(cfg.blocks_per_session(), 4);
        assert_eq!(cfg.min_spacing(), 4);
        assert_eq!(cfg.disciplines().len(), 7);
        assert_eq!(cfg.holidays(), &HolidayWeeks::default());
        assert_eq!(cfg.season(), &SeasonConfig::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = PlanConfig::default()
            .with_exercises_per_block(2)
            .with_blocks_per_session(3)
            .with_min_spacing(2)
            .with_holidays(HolidayWeeks::none())
            .with_disciplines(DisciplineSet::new(["A", "B"]).unwrap())
            .with_season(SeasonConfig::default().with_end_week(20));
        assert_eq!(cfg.exercises_per_block(), 2);
        assert_eq!(cfg.blocks_per_session(), 3);
        assert_eq!(cfg.min_spacing(), 2);
        assert_eq!(cfg.holidays().weeks().count(), 0);
        assert_eq!(cfg.disciplines().len(), 2);
        assert_eq!(cfg.season().end_week(), 20);
    }

    #[test]
    fn validate_zero_exercises() {
        let cfg = PlanConfig::default().with_exercises_per_block(0);
        assert!(matches!(
            cfg.validate(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_zero_blocks() {
        let cfg = PlanConfig::default().with_blocks_per_session(0);
        assert!(matches!(
            cfg.validate(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_bad_season() {
        let cfg = PlanConfig::default().with_season(SeasonConfig::default().with_end_week(0));
        assert_eq!(
            cfg.validate().unwrap_err(),
            PlanError::Calendar(CalendarError::InvalidSeasonWeek { week: 0 })
        );
    }

    #[test]
    fn request_accessors() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let req = PlanRequest::new("7-9", [TrainingDay::WEDNESDAY, TrainingDay::MONDAY], today);
        assert_eq!(req.age_group(), "7-9");
        assert_eq!(
            req.training_days(),
            &[TrainingDay::WEDNESDAY, TrainingDay::MONDAY]
        );
        assert_eq!(req.today(), today);
    }
}
