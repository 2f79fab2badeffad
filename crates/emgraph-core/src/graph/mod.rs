//! Graph backends.
//!
//! The migration writes through [`GraphStore`] and the budget resolver reads
//! through [`GraphReader`]. [`SurrealGraph`] is the embedded database
//! backend; [`MemoryGraph`] implements the same traits in memory for dry runs
//! and tests.

mod error;
mod memory;
mod surreal;

pub use error::GraphError;
pub use memory::{MemoryEdge, MemoryGraph};
pub use surreal::SurrealGraph;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{ClassKind, InsertStatement, Literal, RelationshipDescriptor};

/// Edge direction relative to the entity a traversal starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The start entity is player 1 (owner or referrer).
    Outgoing,
    /// The start entity is player 2.
    Incoming,
}

/// A committed entity as read back from the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEntity {
    pub class: String,
    pub iid: String,
    pub attributes: BTreeMap<String, Literal>,
}

impl GraphEntity {
    pub fn attribute(&self, name: &str) -> Option<&Literal> {
        self.attributes.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Literal::as_str)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.attribute(name).and_then(Literal::as_f64)
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.attribute(name).and_then(Literal::as_bool)
    }

    /// Build an entity from a JSON row. Nested values are dropped since
    /// entities only carry scalar attributes.
    pub(crate) fn from_row(row: serde_json::Value) -> Option<Self> {
        let serde_json::Value::Object(fields) = row else {
            return None;
        };
        let class = fields.get("classKind")?.as_str()?.to_string();
        let iid = fields.get("iid")?.as_str()?.to_string();
        let attributes = fields
            .iter()
            .filter(|(name, _)| name.as_str() != "kinds")
            .filter_map(|(name, value)| Literal::from_json(value).map(|v| (name.clone(), v)))
            .collect();
        Some(Self {
            class,
            iid,
            attributes,
        })
    }
}

/// Write side of the graph. Every call is one transaction.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Create the entity described by `statement`.
    ///
    /// Fails with [`GraphError::DuplicateEntity`] if the iid is taken.
    async fn insert_entity(&self, statement: &InsertStatement) -> Result<(), GraphError>;

    /// Match both endpoints by class and iid and insert the edge.
    ///
    /// Fails with [`GraphError::DanglingReference`] if either endpoint is
    /// missing, in which case nothing is written.
    async fn insert_relationship(
        &self,
        descriptor: &RelationshipDescriptor,
    ) -> Result<(), GraphError>;
}

/// Read side of the graph.
#[async_trait]
pub trait GraphReader: Send + Sync {
    /// All entities of `class`, subclasses included.
    async fn entities(&self, class: ClassKind) -> Result<Vec<GraphEntity>, GraphError>;

    async fn entity(&self, iid: &str) -> Result<Option<GraphEntity>, GraphError>;

    /// Entities on the other end of `relation` edges touching `iid`.
    async fn related(
        &self,
        iid: &str,
        relation: &str,
        direction: Direction,
    ) -> Result<Vec<GraphEntity>, GraphError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_from_row() {
        let entity = GraphEntity::from_row(json!({
            "classKind": "Parameter",
            "iid": "P1",
            "kinds": ["Parameter", "ParameterOrOverrideBase", "Thing"],
            "revisionNumber": 3,
            "isOptionDependent": "true"
        }))
        .unwrap();

        assert_eq!(entity.class, "Parameter");
        assert_eq!(entity.iid, "P1");
        assert!(entity.attribute("kinds").is_none());
        assert_eq!(entity.number("revisionNumber"), Some(3.0));
        assert_eq!(entity.flag("isOptionDependent"), Some(true));
    }

    #[test]
    fn test_row_without_envelope_is_skipped() {
        assert!(GraphEntity::from_row(json!({"name": "x"})).is_none());
        assert!(GraphEntity::from_row(json!([1])).is_none());
    }
}
