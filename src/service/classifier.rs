use crate::models::backup_record::BackupRecord;
use crate::models::classification::ClassificationResult;
use chrono::{DateTime, Duration, Utc};

/// `now - retention_days`. Saturates at the earliest representable instant.
pub fn retention_cutoff(now: DateTime<Utc>, retention_days: u32) -> DateTime<Utc> {
    now.checked_sub_signed(Duration::days(i64::from(retention_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Stable partition of `records`: anything created strictly before the cutoff
/// goes to `to_delete`, everything else to `to_copy`.
pub fn classify(
    records: &[BackupRecord],
    now: DateTime<Utc>,
    retention_days: u32,
) -> ClassificationResult {
    let cutoff = retention_cutoff(now, retention_days);

    let (to_delete, to_copy): (Vec<BackupRecord>, Vec<BackupRecord>) = records
        .iter()
        .cloned()
        .partition(|record| record.created_at.with_timezone(&Utc) < cutoff);

    ClassificationResult {
        cutoff,
        to_copy,
        to_delete,
    }
}
