use crate::models::config::Config;
use crate::models::error::{RetentionError, Result};
use log::{info, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Validates the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating configuration...");

    validate_paths_not_empty(config)?;

    validate_store_directories(&config.source_dir, &config.destination_dir)?;

    validate_log_paths(config)?;

    if config.retention_days == 0 {
        warn!("retention_days is 0: every record created before now will be deleted");
    }

    info!("Configuration validation passed");
    Ok(())
}

fn validate_paths_not_empty(config: &Config) -> Result<()> {
    let named_paths = [
        ("source_dir", &config.source_dir),
        ("destination_dir", &config.destination_dir),
        ("source_log", &config.source_log),
        ("destination_log", &config.destination_log),
        ("metadata_file", &config.metadata_file),
    ];

    for (field, path) in named_paths {
        if path.as_os_str().is_empty() {
            return Err(RetentionError::ConfigInvalid(format!(
                "{} must not be empty",
                field
            )));
        }
    }

    Ok(())
}

/// Source and destination must be different locations, otherwise a copy
/// would truncate its own source.
fn validate_store_directories(source: &Path, destination: &Path) -> Result<()> {
    if same_location(source, destination) {
        return Err(RetentionError::ConfigInvalid(format!(
            "source_dir and destination_dir are the same: {}",
            source.display()
        )));
    }

    if destination.exists() && !destination.is_dir() {
        return Err(RetentionError::ConfigInvalid(format!(
            "destination_dir exists but is not a directory: {}",
            destination.display()
        )));
    }

    if source.exists() && !source.is_dir() {
        return Err(RetentionError::ConfigInvalid(format!(
            "source_dir exists but is not a directory: {}",
            source.display()
        )));
    }

    Ok(())
}

/// Equal after dropping `.` components, or resolving to the same directory
/// when both already exist (covers `..` segments and symlinks).
fn same_location(a: &Path, b: &Path) -> bool {
    if without_cur_dir(a) == without_cur_dir(b) {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| *component != Component::CurDir)
        .collect()
}

fn validate_log_paths(config: &Config) -> Result<()> {
    if config.source_log == config.destination_log {
        return Err(RetentionError::ConfigInvalid(format!(
            "source_log and destination_log are the same: {}",
            config.source_log.display()
        )));
    }

    for log_path in [&config.source_log, &config.destination_log] {
        if log_path == &config.source_dir || log_path == &config.destination_dir {
            return Err(RetentionError::ConfigInvalid(format!(
                "Log file cannot be a store directory: {}",
                log_path.display()
            )));
        }
        if log_path == &config.metadata_file {
            return Err(RetentionError::ConfigInvalid(format!(
                "Log file would overwrite the metadata file: {}",
                log_path.display()
            )));
        }
    }

    Ok(())
}
