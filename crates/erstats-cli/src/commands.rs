use std::io::Write;
use std::path::{Path, PathBuf};

use erstats_dashboard::lookup::lookup_hospital;
use erstats_dashboard::{HostState, render_dashboard_now};
use erstats_datasets::datasets::hospitals::philippine_hospitals;
use erstats_datasets::datasets::prevalence::quick_stats as quick_stats_snapshot;
use erstats_datasets::{all_datasets, validate_all};
use erstats_export::{Format, export};
use eyre::{Result, WrapErr};
use tracing::{error, info};

use crate::cli::RenderArgs;
use crate::config::{self, ErstatsConfig};

const DEFAULT_FILE_STEM: &str = "er-statistics";

/// Where rendered output goes: an explicit path, the configured output
/// directory for binary formats, or stdout.
fn output_path(
    args: &RenderArgs,
    format: Format,
    config: &ErstatsConfig,
) -> Result<Option<PathBuf>> {
    if let Some(out) = &args.out {
        return Ok(Some(out.clone()));
    }
    if !format.is_binary() {
        return Ok(None);
    }
    match &config.output_dir {
        Some(dir) => Ok(Some(
            dir.join(DEFAULT_FILE_STEM).with_extension(format.extension()),
        )),
        None => Err(eyre::eyre!(
            "{format} output is binary; pass --out <PATH> or set output_dir in the config"
        )),
    }
}

pub fn render(args: &RenderArgs, config: &ErstatsConfig) -> Result<()> {
    let format = args.format.unwrap_or(config.default_format);

    let mut state = HostState::default()
        .with_tab(args.tab)
        .with_affordability_tab(args.affordability_tab);
    if let Some(hospital) = args.hospital.as_ref().or(config.default_hospital.as_ref()) {
        state = state.with_hospital(hospital.clone());
    }

    let dashboard = render_dashboard_now(&state);
    let bytes = export(&dashboard, format, &config.styles)
        .wrap_err_with(|| format!("failed to render {format}"))?;

    match output_path(args, format, config)? {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&path, &bytes)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), %format, bytes = bytes.len(), "dashboard written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

pub fn quick_stats(json: bool) -> Result<()> {
    let snapshot = quick_stats_snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!("{}", snapshot.title);
    for metric in &snapshot.metrics {
        println!("  {}: {}", metric.label, metric.value);
    }
    Ok(())
}

pub fn hospitals() -> Result<()> {
    for hospital in philippine_hospitals() {
        let documented = lookup_hospital(&hospital.hospital).is_some_and(|l| l.detail.is_some());
        let marker = if documented { "  (details)" } else { "" };
        println!("{}\t{}{marker}", hospital.hospital, hospital.location);
    }
    Ok(())
}

pub fn validate() -> Result<()> {
    let violations = validate_all();
    if violations.is_empty() {
        println!("{} record sets OK", all_datasets().len());
        return Ok(());
    }

    for violation in &violations {
        error!(table = %violation.table_id, row = violation.row, "{violation}");
    }
    Err(eyre::eyre!("{} schema violation(s)", violations.len()))
}

pub fn config_show(path: &Path) -> Result<()> {
    let config = config::load_from(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn config_init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("config already exists at {}", path.display());
        return Ok(());
    }
    config::save_to(path, &ErstatsConfig::default())?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn config_reset(path: &Path) -> Result<()> {
    if config::delete_at(path)? {
        println!("removed {}", path.display());
    } else {
        println!("no config at {}", path.display());
    }
    Ok(())
}
