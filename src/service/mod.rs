pub mod audit_log;
pub mod classifier;
pub mod clock;
pub mod execution;
pub mod metadata;
pub mod orchestrator;
pub mod reporter;
pub mod store;
