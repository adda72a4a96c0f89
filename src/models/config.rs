use crate::models::config_validator::validate_config;
use crate::models::error::{RetentionError, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,
    #[serde(default = "default_source_log")]
    pub source_log: PathBuf,
    #[serde(default = "default_destination_log")]
    pub destination_log: PathBuf,
    #[serde(default = "default_metadata_file")]
    pub metadata_file: PathBuf,
    /// Records created more than this many days ago are deleted instead of copied.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    #[serde(default = "bool_false")]
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: default_source_dir(),
            destination_dir: default_destination_dir(),
            source_log: default_source_log(),
            destination_log: default_destination_log(),
            metadata_file: default_metadata_file(),
            retention_days: default_retention_days(),
            dry_run: false,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("./valcann/backupsFrom")
}
fn default_destination_dir() -> PathBuf {
    PathBuf::from("./valcann/backupsTo")
}
fn default_source_log() -> PathBuf {
    PathBuf::from("./valcann/backupsFrom.log")
}
fn default_destination_log() -> PathBuf {
    PathBuf::from("./valcann/backupsTo.log")
}
fn default_metadata_file() -> PathBuf {
    PathBuf::from("./valcann/mock.json")
}
const fn default_retention_days() -> u32 {
    3
}
const fn bool_false() -> bool {
    false
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub metadata_file: Option<PathBuf>,
    pub retention_days: Option<u32>,
    pub dry_run: bool,
}

impl ConfigOverrides {
    fn apply(&self, config: &mut Config) {
        if let Some(source_dir) = &self.source_dir {
            config.source_dir = source_dir.clone();
        }
        if let Some(destination_dir) = &self.destination_dir {
            config.destination_dir = destination_dir.clone();
        }
        if let Some(metadata_file) = &self.metadata_file {
            config.metadata_file = metadata_file.clone();
        }
        if let Some(retention_days) = self.retention_days {
            config.retention_days = retention_days;
        }
        if self.dry_run {
            config.dry_run = true;
        }
    }
}

/// Loads the config file if one is given, otherwise starts from defaults,
/// then applies `overrides` and validates the result.
pub fn setup_config(config_file: Option<String>, overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match config_file {
        Some(config_file) => read_config(PathBuf::from(config_file))?,
        None => {
            info!("No config file given, using defaults");
            Config::default()
        }
    };
    overrides.apply(&mut config);

    validate_config(&config)?;

    Ok(config)
}

fn read_config(config_path: PathBuf) -> Result<Config> {
    info!("Loading config from: {}", config_path.display());

    let config_str = fs::read_to_string(&config_path).map_err(|cause| {
        RetentionError::ConfigRead {
            path: config_path.clone(),
            cause,
        }
    })?;

    serde_json::from_str(&config_str).map_err(|cause| RetentionError::ConfigParse {
        path: config_path,
        cause,
    })
}
