//! Declarative class schemas and the template that renders them.
//!
//! Each class declares its scalar attributes and its relationships once, as
//! static data. [`SchemaTemplate`] walks that declaration for a record,
//! checking required fields and coercing values as it goes.

use serde_json::Value;

use crate::model::{ClassKind, InsertStatement, Literal, RelationKind, RelationshipDescriptor};
use crate::sanitize::{sanitize, sanitize_text};

use super::error::TemplateError;
use super::record::Record;
use super::traits::{EntityTemplate, RelationshipSink};

/// How a scalar field is read and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Free text, quote-stripped.
    Text,
    /// Value-array encoding (`["3.4"]`, `[]`, `-`), fully sanitized.
    Value,
    /// Unquoted number.
    Number,
    /// Boolean, emitted quoted.
    Flag,
    /// List of strings joined into one text attribute.
    Joined,
    /// Ordered `{k, v}` list joined into one text attribute.
    JoinedOrdered,
}

/// One scalar attribute of a class.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// Attribute name in the graph.
    pub name: &'static str,
    /// Field name in the export.
    pub field: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
}

impl AttributeSpec {
    pub const fn from_field(self, field: &'static str) -> Self {
        Self { field, ..self }
    }
}

/// Single identifier, unordered list of identifiers, or ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
    Ordered,
}

/// One relationship a class record can imply.
#[derive(Debug, Clone, Copy)]
pub struct RelationSpec {
    pub kind: RelationKind,
    /// Relation name; the label is `<prefix>_<name>`.
    pub name: &'static str,
    /// Field name in the export.
    pub field: &'static str,
    pub target: ClassKind,
    pub cardinality: Cardinality,
    pub required: bool,
}

impl RelationSpec {
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn from_field(self, field: &'static str) -> Self {
        Self { field, ..self }
    }

    pub fn label(&self) -> String {
        self.kind.label(self.name)
    }
}

/// Everything a template needs to know about one class.
#[derive(Debug)]
pub struct ClassSchema {
    pub kind: ClassKind,
    pub attributes: &'static [AttributeSpec],
    pub relations: &'static [RelationSpec],
}

const fn attribute(name: &'static str, kind: AttributeKind, required: bool) -> AttributeSpec {
    AttributeSpec {
        name,
        field: name,
        kind,
        required,
    }
}

pub(crate) const fn text(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Text, true)
}

pub(crate) const fn text_opt(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Text, false)
}

pub(crate) const fn value(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Value, true)
}

pub(crate) const fn number(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Number, true)
}

pub(crate) const fn number_opt(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Number, false)
}

pub(crate) const fn flag(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Flag, true)
}

pub(crate) const fn flag_opt(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Flag, false)
}

pub(crate) const fn joined(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::Joined, false)
}

pub(crate) const fn joined_ordered(name: &'static str) -> AttributeSpec {
    attribute(name, AttributeKind::JoinedOrdered, false)
}

const fn relation(
    kind: RelationKind,
    name: &'static str,
    target: ClassKind,
    cardinality: Cardinality,
) -> RelationSpec {
    RelationSpec {
        kind,
        name,
        field: name,
        target,
        cardinality,
        required: false,
    }
}

pub(crate) const fn contains(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Containment, name, target, Cardinality::Many)
}

pub(crate) const fn contains_ordered(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Containment, name, target, Cardinality::Ordered)
}

pub(crate) const fn contains_one(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Containment, name, target, Cardinality::One)
}

pub(crate) const fn refers(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Reference, name, target, Cardinality::Many)
}

pub(crate) const fn refers_ordered(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Reference, name, target, Cardinality::Ordered)
}

pub(crate) const fn refers_one(name: &'static str, target: ClassKind) -> RelationSpec {
    relation(RelationKind::Reference, name, target, Cardinality::One)
}

/// Separator used when a list-valued attribute is folded into one value.
pub const JOIN_SEPARATOR: &str = ", ";

/// Template driven by a static [`ClassSchema`].
#[derive(Debug, Clone, Copy)]
pub struct SchemaTemplate {
    schema: &'static ClassSchema,
}

impl SchemaTemplate {
    pub fn new(schema: &'static ClassSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'static ClassSchema {
        self.schema
    }

    fn attribute_value(
        &self,
        record: &Record,
        spec: &AttributeSpec,
    ) -> Result<Option<Literal>, TemplateError> {
        let literal = match spec.kind {
            AttributeKind::Text => record
                .text(spec.field)?
                .map(|s| Literal::Text(sanitize_text(&s))),
            AttributeKind::Value => match record.get(spec.field) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(sanitize(s)),
                Some(Value::Number(n)) => n.as_f64().map(Literal::Number),
                Some(Value::Bool(b)) => Some(Literal::Bool(*b)),
                Some(array @ Value::Array(_)) => Some(sanitize(&array.to_string())),
                Some(Value::Object(_)) => {
                    return Err(record.invalid(spec.field, "a value encoding"))
                }
            },
            AttributeKind::Number => record.number(spec.field)?.map(Literal::Number),
            AttributeKind::Flag => record.flag(spec.field)?.map(Literal::Bool),
            AttributeKind::Joined => join(record.strings(spec.field)?),
            AttributeKind::JoinedOrdered => join(record.ordered(spec.field)?),
        };

        match literal {
            None if spec.required => Err(record.missing(spec.field)),
            Some(Literal::Text(s)) if s.is_empty() && !spec.required => Ok(None),
            other => Ok(other),
        }
    }

    fn targets(&self, record: &Record, spec: &RelationSpec) -> Result<Vec<String>, TemplateError> {
        let ids = match spec.cardinality {
            Cardinality::One => record.id(spec.field)?.into_iter().collect(),
            Cardinality::Many => record.strings(spec.field)?,
            Cardinality::Ordered => record.ordered(spec.field)?,
        };
        if ids.is_empty() && spec.required {
            return Err(record.missing(spec.field));
        }
        Ok(ids)
    }
}

fn join(items: Vec<String>) -> Option<Literal> {
    if items.is_empty() {
        return None;
    }
    let joined = items
        .iter()
        .map(|s| sanitize_text(s))
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR);
    Some(Literal::Text(joined))
}

impl EntityTemplate for SchemaTemplate {
    fn class_kind(&self) -> ClassKind {
        self.schema.kind
    }

    fn render(
        &self,
        record: &Record,
        sink: &mut dyn RelationshipSink,
    ) -> Result<InsertStatement, TemplateError> {
        let class = self.schema.kind;
        let mut statement = InsertStatement::new(class, record.iid());
        statement.push("revisionNumber", Literal::Number(record.revision_number()));
        statement.push("classKind", Literal::text(class.as_str()));
        statement.push("iid", Literal::text(sanitize_text(record.iid())));
        if let Some(modified) = record.modified_on() {
            statement.push("lastModifiedOn", Literal::text(sanitize_text(modified)));
        }

        for spec in self.schema.attributes {
            if let Some(value) = self.attribute_value(record, spec)? {
                statement.push(spec.name, value);
            }
        }

        let mut staged = Vec::new();
        for spec in self.schema.relations {
            for target in self.targets(record, spec)? {
                staged.push(RelationshipDescriptor::new(
                    spec.kind,
                    spec.name,
                    class.as_str(),
                    record.iid(),
                    spec.target.as_str(),
                    target,
                ));
            }
        }
        for descriptor in staged {
            sink.append(descriptor);
        }

        Ok(statement)
    }

    fn required_fields(&self) -> Vec<&'static str> {
        let attributes = self
            .schema
            .attributes
            .iter()
            .filter(|a| a.required)
            .map(|a| a.field);
        let relations = self
            .schema
            .relations
            .iter()
            .filter(|r| r.required)
            .map(|r| r.field);
        attributes.chain(relations).collect()
    }
}
