use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Stride configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrideConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Session layout and discipline rotation.
    #[serde(default)]
    pub plan: PlanToml,

    /// Season window bounds.
    #[serde(default)]
    pub season: SeasonToml,

    /// Holiday weeks.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

impl StrideConfig {
    /// Reads `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub bank: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            bank: None,
            output: None,
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "csv".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanToml {
    #[serde(default = "default_exercises_per_block")]
    pub exercises_per_block: usize,
    #[serde(default = "default_blocks_per_session")]
    pub blocks_per_session: u8,
    #[serde(default = "default_min_spacing")]
    pub min_spacing: usize,
    #[serde(default)]
    pub disciplines: Option<Vec<String>>,
}

impl Default for PlanToml {
    fn default() -> Self {
        Self {
            exercises_per_block: default_exercises_per_block(),
            blocks_per_session: default_blocks_per_session(),
            min_spacing: default_min_spacing(),
            disciplines: None,
        }
    }
}

fn default_exercises_per_block() -> usize {
    stride_plan::EXERCISES_PER_BLOCK
}
fn default_blocks_per_session() -> u8 {
    stride_plan::BLOCKS_PER_SESSION
}
fn default_min_spacing() -> usize {
    stride_schedule::DEFAULT_MIN_SPACING
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonToml {
    #[serde(default = "default_earliest_start_week")]
    pub earliest_start_week: u32,
    #[serde(default = "default_end_week")]
    pub end_week: u32,
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl Default for SeasonToml {
    fn default() -> Self {
        Self {
            earliest_start_week: default_earliest_start_week(),
            end_week: default_end_week(),
            end_year: None,
        }
    }
}

fn default_earliest_start_week() -> u32 {
    stride_calendar::EARLIEST_START_WEEK
}
fn default_end_week() -> u32 {
    stride_calendar::SEASON_END_WEEK
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    #[serde(default = "default_holiday_weeks")]
    pub weeks: Vec<u32>,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            weeks: default_holiday_weeks(),
        }
    }
}

fn default_holiday_weeks() -> Vec<u32> {
    stride_schedule::DEFAULT_HOLIDAY_WEEKS.to_vec()
}
