use chrono::{DateTime, Utc};

/// Orchestrator stages, in the order a run moves through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    LoadMetadata,
    LogFullSet,
    Classify,
    DeletePhase,
    CopyPhase,
    LogCopiedSet,
    Done,
    Aborted,
}

/// Counts produced by the deletion and copy phases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub removed: usize,
    pub already_absent: usize,
    pub remove_failures: usize,
    /// Names that copied without error, in copy order.
    pub copied: Vec<String>,
    pub copy_failures: usize,
    pub bytes_copied: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub cutoff: DateTime<Utc>,
    pub records_loaded: usize,
    pub planned_copies: usize,
    pub planned_deletions: usize,
    pub dry_run: bool,
    pub execution: ExecutionReport,
}
