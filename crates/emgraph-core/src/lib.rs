//! Schema-driven migration of engineering model exports into a property
//! graph, and mass budgets computed over the result.

pub mod budget;
pub mod config;
pub mod graph;
pub mod migration;
pub mod model;
pub mod sanitize;
pub mod staging;
pub mod templates;

pub use budget::{BudgetReport, BudgetResolver, BudgetTagger};
pub use config::Config;
pub use graph::{GraphReader, GraphStore, MemoryGraph, SurrealGraph};
pub use migration::{Manifest, MigrationReport, Migrator};
pub use model::{ClassKind, Literal, RelationshipDescriptor};
pub use staging::{FileStaging, MemoryStaging, RelationshipStaging};
pub use templates::{Record, TemplateRegistry};
