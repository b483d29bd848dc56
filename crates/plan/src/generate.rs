//! Season plan assembly.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::Rng;
use stride_calendar::{TrainingDay, WeekRef, season_weeks, training_dates_for_week};
use stride_content::{ContentBank, sample_exercises};
use stride_schedule::assign_discipline_names;
use tracing::{debug, info, warn};

use crate::config::{PlanConfig, PlanRequest};
use crate::error::PlanError;
use crate::model::{Block, SeasonPlan, Session};

/// Generates a season plan for one age group.
///
/// Resolves the season window from `request.today()`, drops holiday weeks,
/// assigns one discipline per session slot (weeks in order, days in
/// chronological order within a week), and fills every session's blocks
/// with exercises sampled from `bank`.
///
/// Every random draw goes through `rng`; with a seeded generator the plan
/// is reproducible. Dates and the session count never depend on `rng`.
///
/// # Errors
///
/// - [`PlanError::InvalidConfig`] or a calendar error if `config` is invalid.
/// - [`PlanError::InvalidInput`] if no training day is selected or the age
///   group is blank.
/// - [`PlanError::NoContentForAgeGroup`] if no configured discipline has
///   content for the age group.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use stride_calendar::TrainingDay;
/// use stride_content::ContentBank;
/// use stride_plan::{PlanConfig, PlanRequest, generate};
///
/// let bank = ContentBank::new().with_activities("Sprint", "7-9", 1, ["Skipping"]);
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let request = PlanRequest::new("7-9", [TrainingDay::MONDAY], today);
/// let mut rng = StdRng::seed_from_u64(1);
/// let plan = generate(&request, &bank, &PlanConfig::default(), &mut rng).unwrap();
/// assert_eq!(plan.len(), 39);
/// ```
#[tracing::instrument(skip_all, fields(age_group = request.age_group(), today = %request.today()))]
pub fn generate(
    request: &PlanRequest,
    bank: &ContentBank,
    config: &PlanConfig,
    rng: &mut impl Rng,
) -> Result<SeasonPlan, PlanError> {
    config.validate()?;
    let days = validate_request(request)?;

    let age_group = request.age_group();
    if !bank.has_age_group(age_group, config.disciplines().iter()) {
        return Err(PlanError::NoContentForAgeGroup {
            age_group: age_group.to_string(),
        });
    }

    let (start, end) = config.season().window(request.today())?;
    let weeks = config.holidays().filter(&season_weeks(start, end)?);
    if weeks.is_empty() {
        warn!(%start, %end, "season window has no training weeks");
        return Ok(SeasonPlan::new(age_group.to_string(), Vec::new()));
    }

    let slots = dated_slots(&weeks, &days)?;
    let disciplines = assign_discipline_names(
        slots.len(),
        config.disciplines(),
        config.min_spacing(),
        rng,
    );

    let mut sessions = Vec::with_capacity(slots.len());
    for ((week, date), discipline) in slots.into_iter().zip(disciplines) {
        let blocks = (1..=config.blocks_per_session())
            .map(|number| {
                let activities = sample_exercises(
                    bank,
                    discipline,
                    age_group,
                    number,
                    config.exercises_per_block(),
                    rng,
                );
                Block::new(number, activities)
            })
            .collect();
        sessions.push(Session::new(week, date, discipline.to_string(), blocks));
    }

    info!(
        n_weeks = weeks.len(),
        n_sessions = sessions.len(),
        %start,
        %end,
        "season plan generated"
    );
    Ok(SeasonPlan::new(age_group.to_string(), sessions))
}

/// Checks the request and returns its training days, deduplicated.
fn validate_request(request: &PlanRequest) -> Result<Vec<TrainingDay>, PlanError> {
    if request.training_days().is_empty() {
        return Err(PlanError::InvalidInput {
            reason: "no training day selected".to_string(),
        });
    }
    if request.age_group().trim().is_empty() {
        return Err(PlanError::InvalidInput {
            reason: "age group is blank".to_string(),
        });
    }
    let days: BTreeSet<TrainingDay> = request.training_days().iter().copied().collect();
    if days.len() < request.training_days().len() {
        debug!(
            n_given = request.training_days().len(),
            n_unique = days.len(),
            "collapsed duplicate training days"
        );
    }
    Ok(days.into_iter().collect())
}

/// One `(week, date)` pair per session slot, weeks in order and dates
/// sorted within each week.
fn dated_slots(
    weeks: &[WeekRef],
    days: &[TrainingDay],
) -> Result<Vec<(WeekRef, NaiveDate)>, PlanError> {
    let mut slots = Vec::with_capacity(weeks.len() * days.len());
    for &week in weeks {
        for date in training_dates_for_week(week, days)? {
            slots.push((week, date));
        }
    }
    Ok(slots)
}
