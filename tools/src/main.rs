//! dashboard-gen: export dashboard JSON from the player analytics database.
//!
//! Usage:
//!   dashboard-gen
//!   dashboard-gen --db data/player_analytics.db --out-dir dashboards/assets
//!   dashboard-gen --config dashboard.json

use anyhow::Result;
use dashboard_core::{config::ReportConfig, generator::ReportGenerator};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = resolve_config(&args)?;

    println!("Generating dashboard data...");
    log::debug!("config: {config:?}");

    let summary = ReportGenerator::new(config).run_with_progress(|file| {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.path.display().to_string());
        println!("  Generated {name}");
    })?;

    println!();
    println!("Dashboard data saved to: {}", summary.output_dir.display());
    Ok(())
}

/// Defaults, then `--config <file>`, then `--db` / `--out-dir`.
fn resolve_config(args: &[String]) -> Result<ReportConfig> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    if let Some(db) = flag_value(args, "--db") {
        config = config.with_db_path(db);
    }
    if let Some(dir) = flag_value(args, "--out-dir") {
        config = config.with_output_dir(dir);
    }
    Ok(config)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
