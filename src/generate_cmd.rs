//! Generate command: build a season plan and export it as CSV or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, warn};

use stride_content::ContentBank;
use stride_plan::{PlanRequest, SeasonPlan, export_filename, generate, to_json, write_csv};

use crate::cli::{GenerateArgs, OutputFormat};
use crate::config::StrideConfig;
use crate::convert;

/// Run the plan generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load config and merge CLI overrides
    let config = StrideConfig::load(args.config.as_deref())?;
    let plan_cfg = convert::build_plan_config(&config)?;
    let format = match args.format {
        Some(f) => f,
        None => convert::parse_format(&config.io.format)?,
    };
    let bank_path = args.bank.as_ref().or(config.io.bank.as_ref()).ok_or_else(|| {
        anyhow!("no content bank: set [io].bank in config or use --bank")
    })?;
    let output = args.output.clone().or_else(|| config.io.output.clone());
    let seed = args.seed.or(config.seed);
    let today = args.today.unwrap_or_else(local_today);

    // 2. Read the content bank
    info!(path = %bank_path.display(), "reading content bank");
    let file = File::open(bank_path)
        .with_context(|| format!("failed to open content bank: {}", bank_path.display()))?;
    let bank = ContentBank::from_reader(io::BufReader::new(file))
        .with_context(|| format!("failed to load content bank: {}", bank_path.display()))?;

    let available = bank.age_groups();
    if !available.contains(args.age_group.as_str()) {
        warn!(
            age_group = %args.age_group,
            available = ?available,
            "age group not found in content bank"
        );
    }

    // 3. Generate
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let request = PlanRequest::new(&args.age_group, args.days.iter().copied(), today);
    let plan = generate(&request, &bank, &plan_cfg, &mut rng)
        .with_context(|| format!("plan generation failed for age group {:?}", args.age_group))?;
    if plan.is_empty() {
        warn!(%today, "generated plan has no sessions");
    }

    // 4. Export
    match output {
        Some(path) => {
            let path = resolve_output_path(&path, &plan, format)?;
            let file = File::create(&path)
                .with_context(|| format!("failed to create output: {}", path.display()))?;
            export(BufWriter::new(file), &plan, format)
                .with_context(|| format!("failed to write plan: {}", path.display()))?;
            info!(path = %path.display(), n_sessions = plan.len(), "plan written");
        }
        None => {
            export(io::stdout().lock(), &plan, format).context("failed to write plan to stdout")?;
        }
    }
    Ok(())
}

fn export(mut writer: impl Write, plan: &SeasonPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(&mut writer, plan)?,
        OutputFormat::Json => {
            writeln!(writer, "{}", to_json(plan)?)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Uses `path` as-is unless it names a directory, in which case the file
/// name is derived from the plan's week range.
fn resolve_output_path(path: &Path, plan: &SeasonPlan, format: OutputFormat) -> Result<PathBuf> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }
    let Some(name) = export_filename(plan) else {
        bail!(
            "plan is empty; cannot derive a file name inside {}",
            path.display()
        );
    };
    let file = match format {
        OutputFormat::Csv => PathBuf::from(name),
        OutputFormat::Json => Path::new(&name).with_extension("json"),
    };
    Ok(path.join(file))
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_calendar::TrainingDay;
    use stride_plan::PlanConfig;

    fn plan() -> SeasonPlan {
        let bank = ContentBank::new().with_activities("Sprint", "7-9", 1, ["Skipping"]);
        let request = PlanRequest::new(
            "7-9",
            [TrainingDay::MONDAY],
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        generate(&request, &bank, &PlanConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn file_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        assert_eq!(
            resolve_output_path(&path, &plan(), OutputFormat::Csv).unwrap(),
            path
        );
    }

    #[test]
    fn directory_gets_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let csv = resolve_output_path(dir.path(), &plan(), OutputFormat::Csv).unwrap();
        assert_eq!(csv, dir.path().join("säsongsplan_v34_2025-v24_2026.csv"));
        let json = resolve_output_path(dir.path(), &plan(), OutputFormat::Json).unwrap();
        assert_eq!(json, dir.path().join("säsongsplan_v34_2025-v24_2026.json"));
    }

    #[test]
    fn directory_with_empty_plan_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_output_path(dir.path(), &SeasonPlan::default(), OutputFormat::Csv).is_err());
    }

    #[test]
    fn json_export_ends_with_newline() {
        let mut buf = Vec::new();
        export(&mut buf, &plan(), OutputFormat::Json).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"age_group\": \"7-9\""));
    }
}
