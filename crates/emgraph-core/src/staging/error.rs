use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting staged relationships.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt staging file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

impl StagingError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StagingError::Io {
            path: path.into(),
            source,
        }
    }
}
