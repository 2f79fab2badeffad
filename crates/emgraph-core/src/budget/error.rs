use thiserror::Error;

use crate::graph::GraphError;

/// Errors that stop a budget from being resolved at all.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("{iid} is a {class}, not an Option")]
    NotAnOption { iid: String, class: String },
}
