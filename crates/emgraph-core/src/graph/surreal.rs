//! SurrealDB embedded graph backend.
//!
//! Every entity lives in the `entity` table under its iid, carrying a
//! `kinds` array with its class and all ancestors so that endpoint matching
//! honours the class hierarchy. Relationships are graph edges in a table
//! named after the relation label.

use std::path::Path;

use async_trait::async_trait;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;
use tracing::debug;

use crate::model::{surql_ident, ClassKind, InsertStatement, RelationshipDescriptor};

use super::{Direction, GraphEntity, GraphError, GraphReader, GraphStore};

/// Database connection for the migrated graph.
pub struct SurrealGraph {
    db: Surreal<Db>,
}

impl SurrealGraph {
    /// Open or create a database at the given path.
    pub async fn open(path: &Path, namespace: &str, database: &str) -> Result<Self, GraphError> {
        let db = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(namespace).use_db(database).await?;

        let graph = Self { db };
        graph.initialize_schema().await?;
        Ok(graph)
    }

    async fn initialize_schema(&self) -> Result<(), GraphError> {
        self.db
            .query(
                r#"
                DEFINE TABLE IF NOT EXISTS entity SCHEMALESS;
                DEFINE INDEX IF NOT EXISTS entity_kinds ON entity FIELDS kinds;
                DEFINE INDEX IF NOT EXISTS entity_class ON entity FIELDS classKind;
                "#,
            )
            .await?
            .check()?;
        Ok(())
    }

    /// Run one transaction and surface its most specific error.
    ///
    /// When a statement inside a transaction fails, every other statement
    /// reports the cancelled transaction instead, so the thrown or rejected
    /// statement has to be picked out of the lot.
    async fn execute(&self, surql: String) -> Result<(), GraphError> {
        debug!(statement = %surql, "Executing");
        let mut response = self.db.query(surql).await?;
        let errors = response.take_errors();
        if errors.is_empty() {
            return Ok(());
        }

        let mut classified: Vec<(usize, GraphError)> = errors
            .into_iter()
            .map(|(index, err)| (index, GraphError::from(err)))
            .collect();
        classified.sort_by_key(|(index, _)| *index);

        let specific = classified
            .iter()
            .position(|(_, err)| !matches!(err, GraphError::Rejected(m) if is_cancelled(m)))
            .unwrap_or(0);
        Err(classified.swap_remove(specific).1)
    }

    async fn select(
        &self,
        query: &str,
        bindings: Vec<(&'static str, String)>,
    ) -> Result<Vec<GraphEntity>, GraphError> {
        let mut request = self.db.query(query);
        for binding in bindings {
            request = request.bind(binding);
        }
        let rows: Vec<serde_json::Value> = request.await?.take(0)?;
        Ok(rows.into_iter().filter_map(GraphEntity::from_row).collect())
    }
}

fn is_cancelled(message: &str) -> bool {
    message.contains("not executed due to a failed transaction")
        || message.contains("cancelled transaction")
}

#[async_trait]
impl GraphStore for SurrealGraph {
    async fn insert_entity(&self, statement: &InsertStatement) -> Result<(), GraphError> {
        self.execute(statement.to_surql()).await
    }

    async fn insert_relationship(
        &self,
        descriptor: &RelationshipDescriptor,
    ) -> Result<(), GraphError> {
        self.execute(descriptor.to_surql()).await
    }
}

#[async_trait]
impl GraphReader for SurrealGraph {
    async fn entities(&self, class: ClassKind) -> Result<Vec<GraphEntity>, GraphError> {
        self.select(
            "SELECT * OMIT id FROM entity WHERE kinds CONTAINS $class ORDER BY iid",
            vec![("class", class.as_str().to_string())],
        )
        .await
    }

    async fn entity(&self, iid: &str) -> Result<Option<GraphEntity>, GraphError> {
        let mut found = self
            .select(
                "SELECT * OMIT id FROM type::thing('entity', $iid)",
                vec![("iid", iid.to_string())],
            )
            .await?;
        Ok(found.pop())
    }

    async fn related(
        &self,
        iid: &str,
        relation: &str,
        direction: Direction,
    ) -> Result<Vec<GraphEntity>, GraphError> {
        let (near, far) = match direction {
            Direction::Outgoing => ("in", "out"),
            Direction::Incoming => ("out", "in"),
        };
        let query = format!(
            "SELECT * OMIT id FROM entity WHERE id IN \
             (SELECT VALUE {far} FROM {table} WHERE {near} = type::thing('entity', $iid))",
            table = surql_ident(relation),
        );
        self.select(&query, vec![("iid", iid.to_string())]).await
    }
}
