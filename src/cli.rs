use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use stride_calendar::TrainingDay;

/// Stride season training-plan generator.
#[derive(Parser)]
#[command(
    name = "stride",
    version,
    about = "Season training-plan generator for youth athletics groups"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a season plan and export it.
    Generate(GenerateArgs),
    /// Print the season's weeks, marking holiday weeks.
    Weeks(WeeksArgs),
}

/// Export format for a generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per exercise, Swedish headers, UTF-8 with BOM.
    Csv,
    /// The full plan as pretty-printed JSON.
    Json,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Content bank JSON; overrides `[io].bank` from config.
    #[arg(short, long)]
    pub bank: Option<PathBuf>,

    /// Age group to plan for, e.g. "7-9".
    #[arg(short, long)]
    pub age_group: String,

    /// Training days, comma-separated (0-6 with 0 = Sunday, or day names).
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub days: Vec<TrainingDay>,

    /// Output file or directory; overrides `[io].output`. Stdout if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format; overrides `[io].format`.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Generation date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the `weeks` subcommand.
#[derive(clap::Args)]
pub struct WeeksArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generation date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
