use std::fmt;

/// Per-item outcome of the execution phases, shown to whoever runs the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorEvent {
    Removed { name: String },
    /// Deletion target was already gone. Not an error.
    AlreadyAbsent { name: String },
    RemoveFailed { name: String, cause: String },
    Copied { name: String, bytes: u64 },
    CopyFailed { name: String, cause: String },
    WouldRemove { name: String },
    WouldCopy { name: String },
    /// Dry run only: a planned copy whose source file is missing.
    MissingSource { name: String },
    /// A store directory could not be created up front.
    StoreSetupFailed { cause: String },
}

impl OperatorEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            OperatorEvent::RemoveFailed { .. }
                | OperatorEvent::CopyFailed { .. }
                | OperatorEvent::MissingSource { .. }
                | OperatorEvent::StoreSetupFailed { .. }
        )
    }
}

impl fmt::Display for OperatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorEvent::Removed { name } => write!(f, "Removed: {}", name),
            OperatorEvent::AlreadyAbsent { name } => {
                write!(f, "Removed: {} (already absent)", name)
            }
            OperatorEvent::RemoveFailed { name, cause } => {
                write!(f, "Failed to remove {}: {}", name, cause)
            }
            OperatorEvent::Copied { name, bytes } => {
                write!(f, "Copied: {} ({} bytes)", name, bytes)
            }
            OperatorEvent::CopyFailed { name, cause } => {
                write!(f, "Failed to copy {}: {}", name, cause)
            }
            OperatorEvent::WouldRemove { name } => write!(f, "Would remove: {}", name),
            OperatorEvent::WouldCopy { name } => write!(f, "Would copy: {}", name),
            OperatorEvent::MissingSource { name } => {
                write!(f, "Would fail to copy {}: source file not found", name)
            }
            OperatorEvent::StoreSetupFailed { cause } => {
                write!(f, "Failed to prepare store directories: {}", cause)
            }
        }
    }
}
