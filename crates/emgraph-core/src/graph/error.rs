//! Graph backend error types.

use thiserror::Error;

use crate::model::DANGLING_MARKER;

/// Errors that can occur while writing to or reading from the graph.
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A transaction lost a read/write conflict and may succeed if retried.
    #[error("Transaction conflict: {0}")]
    Conflict(String),

    /// A relationship endpoint does not resolve to a committed entity.
    #[error("Dangling reference: {0}")]
    DanglingReference(String),

    /// An entity with this iid is already committed.
    #[error("Duplicate entity: {0}")]
    DuplicateEntity(String),

    /// The backend rejected the statement.
    #[error("Statement rejected: {0}")]
    Rejected(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(String),
}

impl GraphError {
    /// Whether retrying the same transaction could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, GraphError::Connection(_) | GraphError::Conflict(_))
    }

    /// Classify a backend error message.
    pub(crate) fn from_message(message: String) -> Self {
        let lower = message.to_ascii_lowercase();
        if message.contains(DANGLING_MARKER) {
            GraphError::DanglingReference(message)
        } else if lower.contains("already exists") {
            GraphError::DuplicateEntity(message)
        } else if lower.contains("conflict") || lower.contains("can be retried") {
            GraphError::Conflict(message)
        } else {
            GraphError::Rejected(message)
        }
    }
}

impl From<surrealdb::Error> for GraphError {
    fn from(err: surrealdb::Error) -> Self {
        match err {
            surrealdb::Error::Api(e) => GraphError::Connection(e.to_string()),
            other => GraphError::from_message(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(matches!(
            GraphError::from_message("An error occurred: dangling reference: x".into()),
            GraphError::DanglingReference(_)
        ));
        assert!(matches!(
            GraphError::from_message("Database record `entity:E1` already exists".into()),
            GraphError::DuplicateEntity(_)
        ));
        assert!(GraphError::from_message(
            "Failed to commit transaction due to a read or write conflict".into()
        )
        .is_transient());
        assert!(!GraphError::from_message("Parse error".into()).is_transient());
    }
}
