//! Entity templates.
//!
//! A template turns one exported record into the insert statement for its
//! entity, and reports every relationship the record implies as a
//! [`RelationshipDescriptor`](crate::model::RelationshipDescriptor).
//!
//! ## Components
//!
//! - `EntityTemplate` - Common interface for all templates
//! - `SchemaTemplate` - Template driven by a static class schema
//! - `TemplateRegistry` - Maps class kinds to templates
//! - `Record` - Envelope-checked input record

mod classes;
mod error;
mod record;
mod registry;
pub mod schema;
mod traits;

pub use error::TemplateError;
pub use record::Record;
pub use registry::TemplateRegistry;
pub use schema::{
    AttributeKind, AttributeSpec, Cardinality, ClassSchema, RelationSpec, SchemaTemplate,
};
pub use traits::{EntityTemplate, RelationshipSink};
