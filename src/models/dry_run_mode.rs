/// Defines the dry-run behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRunMode {
    /// Normal operation - actually delete and copy files
    None,

    /// Plan only - classify and write audit logs, but leave both stores untouched
    Plan,
}

impl DryRunMode {
    pub fn from_flag(dry_run: bool) -> Self {
        if dry_run {
            DryRunMode::Plan
        } else {
            DryRunMode::None
        }
    }

    /// Returns true if this is any dry-run mode
    pub fn is_dry_run(&self) -> bool {
        matches!(self, DryRunMode::Plan)
    }

    /// Returns true if the file store should actually be modified
    pub fn should_modify_store(&self) -> bool {
        matches!(self, DryRunMode::None)
    }

    /// Get display string for progress bars
    pub fn progress_prefix(&self) -> &'static str {
        match self {
            DryRunMode::None => "",
            DryRunMode::Plan => "[DRY RUN] ",
        }
    }
}
