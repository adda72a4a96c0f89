mod models;
mod service;
#[cfg(test)]
mod testing;
mod utils;

use crate::models::config::{setup_config, Config, ConfigOverrides};
use crate::models::run_summary::RunSummary;
use crate::service::clock::SystemClock;
use crate::service::metadata::JsonMetadataFile;
use crate::service::orchestrator::Orchestrator;
use crate::service::reporter::LogReporter;
use crate::service::store::DirectoryStore;
use crate::utils::progress::format_bytes;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "backup-retention")]
#[command(about = "Prunes aged backups and copies the retained ones", long_about = None)]
struct Cli {
    #[arg(short = 'c', long = "config", env = "RETENTION_CONFIG")]
    config_file: Option<String>,

    #[arg(
        short = 'l',
        long = "log-level",
        default_value = "info",
        env = "LOG_LEVEL"
    )]
    log_level: String,

    #[arg(short = 'r', long = "retention-days")]
    retention_days: Option<u32>,

    #[arg(short = 's', long = "source")]
    source_dir: Option<PathBuf>,

    #[arg(short = 'd', long = "destination")]
    destination_dir: Option<PathBuf>,

    #[arg(short = 'm', long = "metadata")]
    metadata_file: Option<PathBuf>,

    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    #[arg(short = 'v', long = "validate-only")]
    validate_only: bool,

    #[arg(long = "dry-run")]
    dry_run: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_dir: self.source_dir.clone(),
            destination_dir: self.destination_dir.clone(),
            metadata_file: self.metadata_file.clone(),
            retention_days: self.retention_days,
            dry_run: self.dry_run,
        }
    }
}

fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(parse_log_level(&args.log_level))
        .format_timestamp_secs()
        .init();

    info!("backup-retention starting...");
    let config = load_config(&args)?;
    debug!("Loaded config: {:?}", &config);

    if args.validate_only {
        info!("Configuration is valid. Exiting (--validate-only mode).");
        return Ok(());
    }

    let summary = run_retention(config, !args.quiet).context("Retention run aborted")?;
    log_summary(&summary);

    println!("Process completed successfully!");
    Ok(())
}

fn load_config(args: &Cli) -> Result<Config> {
    setup_config(args.config_file.clone(), &args.overrides()).context("Failed to load configuration")
}

fn run_retention(config: Config, show_progress: bool) -> models::error::Result<RunSummary> {
    let metadata = JsonMetadataFile::new(&config.metadata_file);
    let store = DirectoryStore::new(&config.source_dir, &config.destination_dir);
    let clock = SystemClock;
    let mut reporter = LogReporter::new();

    info!(
        "Source: {} -> destination: {}",
        store.source_dir().display(),
        store.destination_dir().display()
    );

    let mut orchestrator = Orchestrator::new(config, &metadata, &store, &clock, &mut reporter)
        .with_progress(show_progress);
    let result = orchestrator.run();
    debug!("Run states: {:?}", orchestrator.states());
    let summary = result?;

    if reporter.failures() > 0 {
        warn!(
            "{} item(s) could not be processed, see messages above",
            reporter.failures()
        );
    }
    Ok(summary)
}

fn log_summary(summary: &RunSummary) {
    let execution = &summary.execution;
    info!(
        "Run {} started at {} finished: {} records, cutoff {}",
        summary.run_id,
        summary.started_at.to_rfc3339(),
        summary.records_loaded,
        summary.cutoff.to_rfc3339()
    );
    if summary.dry_run {
        info!(
            "DRY RUN completed - {} would be removed, {} would be copied",
            summary.planned_deletions, summary.planned_copies
        );
        return;
    }
    info!(
        "Removed {} ({} already absent, {} failed) of {} aged backups",
        execution.removed,
        execution.already_absent,
        execution.remove_failures,
        summary.planned_deletions
    );
    info!(
        "Copied {} of {} retained backups ({}), {} failed",
        execution.copied.len(),
        summary.planned_copies,
        format_bytes(execution.bytes_copied),
        execution.copy_failures
    );
}
