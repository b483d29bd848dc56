//! Tabular and JSON export of a [`SeasonPlan`].
//!
//! The CSV layout has one row per exercise with Swedish column headers:
//!
//! | Vecka | Datum | Gren | Block | Övning | Beskrivning |
//! |-------|-------|------|-------|--------|-------------|
//! | Vecka 34, 2025 | 18/08 (Måndag) | Sprint | Block 1 | Skipping | |
//!
//! Output starts with a UTF-8 byte order mark so spreadsheet programs pick
//! the right encoding.

use std::io::Write;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::error::PlanError;
use crate::model::SeasonPlan;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 6] = ["Vecka", "Datum", "Gren", "Block", "Övning", "Beskrivning"];

const BOM: &str = "\u{feff}";

/// One exported exercise row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Vecka")]
    pub week: String,
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Gren")]
    pub discipline: String,
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Övning")]
    pub exercise: String,
    #[serde(rename = "Beskrivning")]
    pub description: String,
}

impl ExportRow {
    fn fields(&self) -> [&str; 6] {
        [
            &self.week,
            &self.date,
            &self.discipline,
            &self.block,
            &self.exercise,
            &self.description,
        ]
    }
}

/// Swedish name of a weekday, capitalized.
pub fn day_name_sv(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Måndag",
        Weekday::Tue => "Tisdag",
        Weekday::Wed => "Onsdag",
        Weekday::Thu => "Torsdag",
        Weekday::Fri => "Fredag",
        Weekday::Sat => "Lördag",
        Weekday::Sun => "Söndag",
    }
}

/// Formats a date as `dd/mm`.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}

/// Flattens a plan into one row per exercise, in plan order.
///
/// Blocks without exercises produce no rows.
pub fn export_rows(plan: &SeasonPlan) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    for session in plan.sessions() {
        let week = format!("Vecka {}, {}", session.week().week(), session.week().year());
        let date = format!(
            "{} ({})",
            format_day_month(session.date()),
            day_name_sv(session.weekday())
        );
        for block in session.blocks() {
            for exercise in block.activities() {
                rows.push(ExportRow {
                    week: week.clone(),
                    date: date.clone(),
                    discipline: session.discipline().to_string(),
                    block: format!("Block {}", block.number()),
                    exercise: exercise.clone(),
                    description: String::new(),
                });
            }
        }
    }
    rows
}

/// Quotes a CSV field if it contains a comma, a quote or a newline.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_line<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders the plan as CSV text: byte order mark, header, then one line per
/// exercise. Lines are separated by `\n` with no trailing newline.
pub fn to_csv_string(plan: &SeasonPlan) -> String {
    let rows = export_rows(plan);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(csv_line(CSV_HEADERS));
    lines.extend(rows.iter().map(|row| csv_line(row.fields())));
    format!("{BOM}{}", lines.join("\n"))
}

/// Writes the plan as CSV to `writer`.
///
/// # Errors
///
/// Returns [`PlanError::Io`] if writing fails.
pub fn write_csv(mut writer: impl Write, plan: &SeasonPlan) -> Result<(), PlanError> {
    let csv = to_csv_string(plan);
    writer.write_all(csv.as_bytes())?;
    writer.flush()?;
    debug!(n_bytes = csv.len(), n_sessions = plan.len(), "wrote csv");
    Ok(())
}

/// Suggested file name covering the plan's week range, e.g.
/// `säsongsplan_v34_2025-v24_2026.csv`. `None` for an empty plan.
pub fn export_filename(plan: &SeasonPlan) -> Option<String> {
    let first = plan.first_week()?;
    let last = plan.last_week()?;
    Some(format!(
        "säsongsplan_v{}_{}-v{}_{}.csv",
        first.week(),
        first.year(),
        last.week(),
        last.year()
    ))
}

/// Serializes the plan to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`PlanError::Serialization`] if serialization fails.
pub fn to_json(plan: &SeasonPlan) -> Result<String, PlanError> {
    serde_json::to_string_pretty(plan).map_err(|e| PlanError::Serialization {
        reason: e.to_string(),
    })
}
