pub mod backup_record;
pub mod classification;
pub mod config;
pub mod config_validator;
pub mod dry_run_mode;
pub mod error;
pub mod operator_event;
pub mod run_summary;
