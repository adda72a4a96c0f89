use crate::models::backup_record::BackupRecord;
use crate::models::error::{RetentionError, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

/// Where the list of known backups comes from.
pub trait MetadataSource {
    fn load(&self) -> Result<Vec<BackupRecord>>;
}

/// Reads the catalog descriptor: a JSON array of backup records.
#[derive(Debug, Clone)]
pub struct JsonMetadataFile {
    path: PathBuf,
}

impl JsonMetadataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonMetadataFile { path: path.into() }
    }
}

impl MetadataSource for JsonMetadataFile {
    fn load(&self) -> Result<Vec<BackupRecord>> {
        info!("Loading backup metadata from: {}", self.path.display());

        let contents = fs::read_to_string(&self.path).map_err(|cause| {
            RetentionError::MetadataRead {
                path: self.path.clone(),
                cause,
            }
        })?;

        let records: Vec<BackupRecord> =
            serde_json::from_str(&contents).map_err(|cause| RetentionError::MetadataParse {
                path: self.path.clone(),
                cause,
            })?;

        if let Some(index) = records.iter().position(|record| record.name.is_empty()) {
            return Err(RetentionError::MetadataInvalid {
                path: self.path.clone(),
                index,
                reason: "empty name".to_string(),
            });
        }

        debug!("Loaded {} backup records", records.len());
        Ok(records)
    }
}
