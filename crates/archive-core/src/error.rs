//! Error types for archive-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for archive operations
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Main error type for archive operations.
///
/// Every variant is raised while loading inputs; aggregation itself does not
/// fail once a config and publication list are in hand.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Reading an input file failed
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// archive.yaml is not valid YAML or does not match the schema
    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// publications.json is not valid JSON or does not match the schema
    #[error("Publications parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but violates a structural rule
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }
}
