//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::cli::OutputFormat;
use crate::config::*;

use stride_calendar::SeasonConfig;
use stride_plan::PlanConfig;
use stride_schedule::{DisciplineSet, HolidayWeeks};

/// Parses an export format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "csv" => Ok(OutputFormat::Csv),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds a [`SeasonConfig`] from the TOML season configuration.
pub fn build_season_config(season: &SeasonToml) -> SeasonConfig {
    SeasonConfig::default()
        .with_earliest_start_week(season.earliest_start_week)
        .with_end_week(season.end_week)
        .with_end_year(season.end_year)
}

/// Builds a [`HolidayWeeks`] set from the TOML holiday configuration.
pub fn build_holidays(holidays: &HolidaysToml) -> Result<HolidayWeeks> {
    HolidayWeeks::new(holidays.weeks.iter().copied()).context("invalid [holidays].weeks")
}

/// Builds a [`PlanConfig`] from the full TOML configuration.
///
/// Without a `[plan].disciplines` list the default seven disciplines are
/// used.
pub fn build_plan_config(config: &StrideConfig) -> Result<PlanConfig> {
    let disciplines = match config.plan.disciplines {
        Some(ref names) => {
            DisciplineSet::new(names.iter().cloned()).context("invalid [plan].disciplines")?
        }
        None => DisciplineSet::default(),
    };
    let cfg = PlanConfig::default()
        .with_exercises_per_block(config.plan.exercises_per_block)
        .with_blocks_per_session(config.plan.blocks_per_session)
        .with_min_spacing(config.plan.min_spacing)
        .with_disciplines(disciplines)
        .with_holidays(build_holidays(&config.holidays)?)
        .with_season(build_season_config(&config.season));
    cfg.validate().context("invalid plan configuration")?;
    Ok(cfg)
}
