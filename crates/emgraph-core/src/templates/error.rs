//! Template error types.

use thiserror::Error;

/// A record that a template cannot turn into a statement.
///
/// These are per-record and recoverable: the orchestrator records them and
/// moves on to the next record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    /// The array element is not a JSON object.
    #[error("record is not a JSON object")]
    NotAnObject,

    /// One of `classKind`, `iid`, `revisionNumber` is absent or mistyped.
    #[error("record envelope field '{field}' is missing or invalid")]
    Envelope { field: &'static str },

    /// A field the class declares as required is absent or null.
    #[error("{class} {iid}: missing required field '{field}'")]
    MissingField {
        class: String,
        iid: String,
        field: String,
    },

    /// A field holds a JSON value of the wrong shape.
    #[error("{class} {iid}: field '{field}' should be {expected}")]
    InvalidField {
        class: String,
        iid: String,
        field: String,
        expected: &'static str,
    },
}
