use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetentionError {
    #[error("Failed to read config file '{path}': {cause}")]
    ConfigRead { path: PathBuf, cause: io::Error },

    #[error("Failed to parse config file '{path}': {cause}")]
    ConfigParse {
        path: PathBuf,
        cause: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("Failed to read metadata file '{path}': {cause}")]
    MetadataRead { path: PathBuf, cause: io::Error },

    #[error("Failed to parse metadata file '{path}': {cause}")]
    MetadataParse {
        path: PathBuf,
        cause: serde_json::Error,
    },

    #[error("Invalid record #{index} in metadata file '{path}': {reason}")]
    MetadataInvalid {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    #[error("Failed to write log file '{path}': {cause}")]
    LogWrite { path: PathBuf, cause: io::Error },
}

pub type Result<T> = std::result::Result<T, RetentionError>;
