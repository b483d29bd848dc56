//! Weeks command: list the season window with holiday weeks marked.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info_span;

use stride_calendar::{WeekRef, season_weeks};
use stride_schedule::HolidayWeeks;

use crate::cli::WeeksArgs;
use crate::config::StrideConfig;
use crate::convert;

/// Print every week of the season, one per line.
pub fn run(args: WeeksArgs) -> Result<()> {
    let _cmd = info_span!("weeks").entered();

    let config = StrideConfig::load(args.config.as_deref())?;
    let season = convert::build_season_config(&config.season);
    let holidays = convert::build_holidays(&config.holidays)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let (start, end) = season
        .window(today)
        .with_context(|| format!("failed to resolve season window for {today}"))?;
    let weeks = season_weeks(start, end).context("failed to enumerate season weeks")?;

    let mut out = io::stdout().lock();
    write_weeks(&mut out, &weeks, &holidays, today)?;
    Ok(())
}

/// Writes a header and one line per week: the week, its Monday, and a
/// holiday marker where applicable.
fn write_weeks(
    mut out: impl Write,
    weeks: &[WeekRef],
    holidays: &HolidayWeeks,
    today: NaiveDate,
) -> Result<()> {
    let n_training = weeks.iter().filter(|w| !holidays.contains(**w)).count();
    writeln!(
        out,
        "season generated {today}: {} weeks, {n_training} training weeks",
        weeks.len()
    )?;
    for &week in weeks {
        let monday = week.monday()?;
        if holidays.contains(week) {
            writeln!(out, "{week}  {monday}  holiday")?;
        } else {
            writeln!(out, "{week}  {monday}")?;
        }
    }
    Ok(())
}
