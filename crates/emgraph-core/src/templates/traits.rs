//! Template and sink traits.

use crate::model::{ClassKind, InsertStatement, RelationshipDescriptor};

use super::error::TemplateError;
use super::record::Record;

/// Receives the relationship descriptors a template discovers.
///
/// Templates never commit edges themselves; they hand descriptors to
/// whichever sink the caller threads through.
pub trait RelationshipSink {
    fn append(&mut self, descriptor: RelationshipDescriptor);
}

impl RelationshipSink for Vec<RelationshipDescriptor> {
    fn append(&mut self, descriptor: RelationshipDescriptor) {
        self.push(descriptor);
    }
}

/// Turns one record of a specific class into an insert statement.
///
/// # Example
///
/// ```ignore
/// use emgraph_core::templates::{EntityTemplate, TemplateRegistry};
///
/// let registry = TemplateRegistry::new();
/// let template = registry.template_for("Parameter").unwrap();
/// let mut staged = Vec::new();
/// let statement = template.render(&record, &mut staged)?;
/// ```
pub trait EntityTemplate: Send + Sync {
    /// The class this template handles.
    fn class_kind(&self) -> ClassKind;

    /// Build the entity statement and append one descriptor per implied
    /// relationship to `sink`.
    ///
    /// On error nothing is guaranteed about what was appended, so callers
    /// that need all-or-nothing should render into a scratch buffer.
    fn render(
        &self,
        record: &Record,
        sink: &mut dyn RelationshipSink,
    ) -> Result<InsertStatement, TemplateError>;

    /// Fields the template treats as mandatory.
    fn required_fields(&self) -> Vec<&'static str> {
        Vec::new()
    }
}
