use crate::models::backup_record::BackupRecord;
use crate::models::dry_run_mode::DryRunMode;
use crate::models::operator_event::OperatorEvent;
use crate::models::run_summary::ExecutionReport;
use crate::service::reporter::Reporter;
use crate::service::store::{FileStore, RemoveOutcome};
use indicatif::ProgressBar;
use log::debug;

/// Removes every aged record from the source store. A missing file counts
/// as done; any other failure is reported and the loop moves on.
pub fn delete_aged(
    records: &[BackupRecord],
    store: &dyn FileStore,
    reporter: &mut dyn Reporter,
    dry_run_mode: DryRunMode,
    progress: Option<&ProgressBar>,
    report: &mut ExecutionReport,
) {
    debug!("Deleting {} aged backups", records.len());

    for record in records {
        if let Some(pb) = progress {
            pb.set_message(record.name.clone());
        }

        let name = record.name.clone();
        if !dry_run_mode.should_modify_store() {
            if store.exists(&record.name) {
                reporter.report(OperatorEvent::WouldRemove { name });
            } else {
                reporter.report(OperatorEvent::AlreadyAbsent { name });
            }
        } else {
            match store.remove(&record.name) {
                Ok(RemoveOutcome::Removed) => {
                    report.removed += 1;
                    reporter.report(OperatorEvent::Removed { name });
                }
                Ok(RemoveOutcome::Absent) => {
                    report.already_absent += 1;
                    reporter.report(OperatorEvent::AlreadyAbsent { name });
                }
                Err(error) => {
                    report.remove_failures += 1;
                    reporter.report(OperatorEvent::RemoveFailed {
                        name,
                        cause: error.to_string(),
                    });
                }
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
}

/// Copies every retained record to the destination store. Only copies that
/// finish without error land in `report.copied`.
pub fn copy_retained(
    records: &[BackupRecord],
    store: &dyn FileStore,
    reporter: &mut dyn Reporter,
    dry_run_mode: DryRunMode,
    progress: Option<&ProgressBar>,
    report: &mut ExecutionReport,
) {
    debug!("Copying {} retained backups", records.len());

    for record in records {
        if let Some(pb) = progress {
            pb.set_message(record.name.clone());
        }

        let name = record.name.clone();
        if !dry_run_mode.should_modify_store() {
            if store.exists(&record.name) {
                reporter.report(OperatorEvent::WouldCopy { name });
            } else {
                reporter.report(OperatorEvent::MissingSource { name });
            }
        } else {
            match store.copy(&record.name) {
                Ok(bytes) => {
                    report.copied.push(name.clone());
                    report.bytes_copied += bytes;
                    reporter.report(OperatorEvent::Copied { name, bytes });
                }
                Err(error) => {
                    report.copy_failures += 1;
                    reporter.report(OperatorEvent::CopyFailed {
                        name,
                        cause: error.to_string(),
                    });
                }
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
}
