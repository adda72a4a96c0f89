use crate::models::backup_record::BackupRecord;
use chrono::{DateTime, Utc};

/// Outcome of the retention decision for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub cutoff: DateTime<Utc>,
    pub to_copy: Vec<BackupRecord>,
    pub to_delete: Vec<BackupRecord>,
}

impl ClassificationResult {
    pub fn total(&self) -> usize {
        self.to_copy.len() + self.to_delete.len()
    }
}
