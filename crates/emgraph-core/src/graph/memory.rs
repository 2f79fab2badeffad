//! In-memory graph.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{ClassKind, InsertStatement, RelationshipDescriptor};

use super::{Direction, GraphEntity, GraphError, GraphReader, GraphStore};

/// A committed edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEdge {
    pub relationship: String,
    pub from: String,
    pub to: String,
    pub role1: String,
    pub role2: String,
}

#[derive(Debug, Default)]
struct Inner {
    entities: HashMap<String, (ClassKind, GraphEntity)>,
    edges: Vec<MemoryEdge>,
}

/// Graph held entirely in memory.
///
/// Follows the same rules as the database backend: duplicate iids are
/// rejected, endpoints match through the class hierarchy and a missing
/// endpoint fails the edge.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    inner: RwLock<Inner>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entity_count(&self) -> usize {
        self.inner.read().await.entities.len()
    }

    pub async fn edge_count(&self) -> usize {
        self.inner.read().await.edges.len()
    }

    /// Committed edges, in commit order.
    pub async fn edges(&self) -> Vec<MemoryEdge> {
        self.inner.read().await.edges.clone()
    }
}

impl Inner {
    fn resolve(&self, class: &str, iid: &str) -> bool {
        let Ok(class) = class.parse::<ClassKind>() else {
            return false;
        };
        self.entities
            .get(iid)
            .is_some_and(|(kind, _)| kind.is_a(class))
    }
}

#[async_trait]
impl GraphStore for MemoryGraph {
    async fn insert_entity(&self, statement: &InsertStatement) -> Result<(), GraphError> {
        let mut inner = self.inner.write().await;
        if inner.entities.contains_key(&statement.iid) {
            return Err(GraphError::DuplicateEntity(format!(
                "{} {}",
                statement.class, statement.iid
            )));
        }

        let attributes: BTreeMap<_, _> = statement.attributes.iter().cloned().collect();
        let entity = GraphEntity {
            class: statement.class.as_str().to_string(),
            iid: statement.iid.clone(),
            attributes,
        };
        inner
            .entities
            .insert(statement.iid.clone(), (statement.class, entity));
        Ok(())
    }

    async fn insert_relationship(
        &self,
        descriptor: &RelationshipDescriptor,
    ) -> Result<(), GraphError> {
        let mut inner = self.inner.write().await;
        if !inner.resolve(&descriptor.class1, &descriptor.player1)
            || !inner.resolve(&descriptor.class2, &descriptor.player2)
        {
            return Err(GraphError::DanglingReference(descriptor.to_string()));
        }

        inner.edges.push(MemoryEdge {
            relationship: descriptor.relationship.clone(),
            from: descriptor.player1.clone(),
            to: descriptor.player2.clone(),
            role1: descriptor.role1.clone(),
            role2: descriptor.role2.clone(),
        });
        Ok(())
    }
}

#[async_trait]
impl GraphReader for MemoryGraph {
    async fn entities(&self, class: ClassKind) -> Result<Vec<GraphEntity>, GraphError> {
        let inner = self.inner.read().await;
        let mut found: Vec<_> = inner
            .entities
            .values()
            .filter(|(kind, _)| kind.is_a(class))
            .map(|(_, entity)| entity.clone())
            .collect();
        found.sort_by(|a, b| a.iid.cmp(&b.iid));
        Ok(found)
    }

    async fn entity(&self, iid: &str) -> Result<Option<GraphEntity>, GraphError> {
        let inner = self.inner.read().await;
        Ok(inner.entities.get(iid).map(|(_, entity)| entity.clone()))
    }

    async fn related(
        &self,
        iid: &str,
        relation: &str,
        direction: Direction,
    ) -> Result<Vec<GraphEntity>, GraphError> {
        let inner = self.inner.read().await;
        let related = inner
            .edges
            .iter()
            .filter(|edge| edge.relationship == relation)
            .filter_map(|edge| match direction {
                Direction::Outgoing if edge.from == iid => Some(&edge.to),
                Direction::Incoming if edge.to == iid => Some(&edge.from),
                _ => None,
            })
            .filter_map(|other| inner.entities.get(other))
            .map(|(_, entity)| entity.clone())
            .collect();
        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, RelationKind};

    fn statement(class: ClassKind, iid: &str) -> InsertStatement {
        let mut statement = InsertStatement::new(class, iid);
        statement.push("iid", Literal::text(iid));
        statement.push("classKind", Literal::text(class.as_str()));
        statement
    }

    #[tokio::test]
    async fn test_duplicate_iid_rejected() {
        let graph = MemoryGraph::new();
        graph
            .insert_entity(&statement(ClassKind::Option, "O1"))
            .await
            .unwrap();
        let err = graph
            .insert_entity(&statement(ClassKind::Option, "O1"))
            .await
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEntity(_)));
        assert_eq!(graph.entity_count().await, 1);
    }

    #[tokio::test]
    async fn test_edge_endpoints_match_subclasses() {
        let graph = MemoryGraph::new();
        graph
            .insert_entity(&statement(ClassKind::Parameter, "P1"))
            .await
            .unwrap();
        graph
            .insert_entity(&statement(ClassKind::RatioScale, "S1"))
            .await
            .unwrap();

        let scale = RelationshipDescriptor::new(
            RelationKind::Reference,
            "scale",
            "Parameter",
            "P1",
            "MeasurementScale",
            "S1",
        );
        graph.insert_relationship(&scale).await.unwrap();

        let related = graph
            .related("P1", "Reference_scale", Direction::Outgoing)
            .await
            .unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].iid, "S1");

        let back = graph
            .related("S1", "Reference_scale", Direction::Incoming)
            .await
            .unwrap();
        assert_eq!(back[0].iid, "P1");
    }

    #[tokio::test]
    async fn test_missing_endpoint_is_dangling() {
        let graph = MemoryGraph::new();
        graph
            .insert_entity(&statement(ClassKind::Parameter, "P1"))
            .await
            .unwrap();

        let wrong_class = RelationshipDescriptor::new(
            RelationKind::Reference,
            "scale",
            "Parameter",
            "P1",
            "ElementDefinition",
            "P1",
        );
        let missing = RelationshipDescriptor::new(
            RelationKind::Reference,
            "scale",
            "Parameter",
            "P1",
            "MeasurementScale",
            "S9",
        );

        for descriptor in [wrong_class, missing] {
            assert!(matches!(
                graph.insert_relationship(&descriptor).await,
                Err(GraphError::DanglingReference(_))
            ));
        }
        assert_eq!(graph.edge_count().await, 0);
    }

    #[tokio::test]
    async fn test_entities_by_abstract_class() {
        let graph = MemoryGraph::new();
        graph
            .insert_entity(&statement(ClassKind::RatioScale, "S1"))
            .await
            .unwrap();
        graph
            .insert_entity(&statement(ClassKind::OrdinalScale, "S2"))
            .await
            .unwrap();
        graph
            .insert_entity(&statement(ClassKind::Option, "O1"))
            .await
            .unwrap();

        let scales = graph.entities(ClassKind::MeasurementScale).await.unwrap();
        assert_eq!(scales.len(), 2);
        assert_eq!(graph.entities(ClassKind::Thing).await.unwrap().len(), 3);
    }
}
