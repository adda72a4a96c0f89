use crate::models::config::Config;
use crate::models::dry_run_mode::DryRunMode;
use crate::models::error::Result;
use crate::models::operator_event::OperatorEvent;
use crate::models::run_summary::{ExecutionReport, RunState, RunSummary};
use crate::service::audit_log::write_log;
use crate::service::classifier::classify;
use crate::service::clock::Clock;
use crate::service::execution::{copy_retained, delete_aged};
use crate::service::metadata::MetadataSource;
use crate::service::reporter::Reporter;
use crate::service::store::FileStore;
use crate::utils::progress::create_progress_bar;
use log::{debug, error, info};
use uuid::Uuid;

/// Drives one retention run:
/// load metadata, log the full set, classify, delete, copy, log the copied set.
///
/// Only metadata loading and the two log writes can abort a run. Per-item
/// failures in the delete and copy phases go to the reporter.
pub struct Orchestrator<'a> {
    config: Config,
    metadata: &'a dyn MetadataSource,
    store: &'a dyn FileStore,
    clock: &'a dyn Clock,
    reporter: &'a mut dyn Reporter,
    show_progress: bool,
    states: Vec<RunState>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        config: Config,
        metadata: &'a dyn MetadataSource,
        store: &'a dyn FileStore,
        clock: &'a dyn Clock,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Orchestrator {
            config,
            metadata,
            store,
            clock,
            reporter,
            show_progress: false,
            states: vec![RunState::Start],
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn state(&self) -> RunState {
        self.states.last().copied().unwrap_or(RunState::Start)
    }

    /// Every state this orchestrator has passed through, in order.
    pub fn states(&self) -> &[RunState] {
        &self.states
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let run_id = Uuid::new_v4().to_string();
        let started_at = self.clock.now();
        let dry_run_mode = DryRunMode::from_flag(self.config.dry_run);
        info!(
            "{}Starting retention run {} (retention: {} days)",
            dry_run_mode.progress_prefix(),
            run_id,
            self.config.retention_days
        );

        if dry_run_mode.should_modify_store() {
            if let Err(cause) = self.store.ensure_locations() {
                self.reporter.report(OperatorEvent::StoreSetupFailed {
                    cause: cause.to_string(),
                });
            }
        }

        self.enter(RunState::LoadMetadata);
        let load_result = self.metadata.load();
        let records = self.check(load_result)?;
        info!("Loaded {} backup records", records.len());

        self.enter(RunState::LogFullSet);
        let full_log_result = write_log(&records, &self.config.source_log);
        self.check(full_log_result)?;

        self.enter(RunState::Classify);
        let plan = classify(&records, started_at, self.config.retention_days);
        info!(
            "Cutoff {}: of {} records, {} to copy and {} to delete",
            plan.cutoff.to_rfc3339(),
            plan.total(),
            plan.to_copy.len(),
            plan.to_delete.len()
        );

        let mut execution = ExecutionReport::default();

        self.enter(RunState::DeletePhase);
        let delete_progress = self.progress_bar(
            plan.to_delete.len(),
            &format!("{}[1/2] Removing aged backups", dry_run_mode.progress_prefix()),
        );
        delete_aged(
            &plan.to_delete,
            self.store,
            &mut *self.reporter,
            dry_run_mode,
            delete_progress.as_ref(),
            &mut execution,
        );
        if let Some(pb) = delete_progress {
            pb.finish_and_clear();
        }

        self.enter(RunState::CopyPhase);
        let copy_progress = self.progress_bar(
            plan.to_copy.len(),
            &format!("{}[2/2] Copying retained backups", dry_run_mode.progress_prefix()),
        );
        copy_retained(
            &plan.to_copy,
            self.store,
            &mut *self.reporter,
            dry_run_mode,
            copy_progress.as_ref(),
            &mut execution,
        );
        if let Some(pb) = copy_progress {
            pb.finish_and_clear();
        }

        // Audits what was planned for copying, not what copied successfully.
        self.enter(RunState::LogCopiedSet);
        let copied_log_result = write_log(&plan.to_copy, &self.config.destination_log);
        self.check(copied_log_result)?;

        self.enter(RunState::Done);

        Ok(RunSummary {
            run_id,
            started_at,
            cutoff: plan.cutoff,
            records_loaded: records.len(),
            planned_copies: plan.to_copy.len(),
            planned_deletions: plan.to_delete.len(),
            dry_run: dry_run_mode.is_dry_run(),
            execution,
        })
    }

    fn enter(&mut self, state: RunState) {
        debug!("Run state: {:?}", state);
        self.states.push(state);
    }

    fn check<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            error!("Run aborted during {:?}: {}", self.state(), e);
            self.states.push(RunState::Aborted);
        }
        result
    }

    fn progress_bar(&self, total: usize, prefix: &str) -> Option<indicatif::ProgressBar> {
        if self.show_progress && total > 0 {
            Some(create_progress_bar(total as u64, prefix))
        } else {
            None
        }
    }
}
