//! Migration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::GraphError;
use crate::staging::StagingError;

/// Failures that abort a migration run.
///
/// Per-record and per-relationship problems are not errors; they end up in
/// the reports.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input file {0} is not a JSON array of records")]
    NotAnArray(PathBuf),

    #[error("Staging error: {0}")]
    Staging(#[from] StagingError),

    #[error("Graph unavailable after {attempts} attempts: {source}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: GraphError,
    },
}

impl MigrationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MigrationError::Io {
            path: path.into(),
            source,
        }
    }
}
