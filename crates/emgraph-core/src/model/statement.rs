//! Entity insert statements produced by templates.

use super::class_kind::ClassKind;
use super::literal::{quote, Literal};
use super::surql_ident;

/// "Create an entity of type T with attributes {...}".
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub class: ClassKind,
    pub iid: String,
    /// Attributes in emission order, base attributes first.
    pub attributes: Vec<(String, Literal)>,
}

impl InsertStatement {
    pub fn new(class: ClassKind, iid: impl Into<String>) -> Self {
        Self {
            class,
            iid: iid.into(),
            attributes: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: Literal) {
        self.attributes.push((name.into(), value));
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Literal> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Render as a single SurrealQL transaction.
    pub fn to_surql(&self) -> String {
        let kinds = self
            .class
            .lineage()
            .iter()
            .map(|k| quote(k.as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut assignments = vec![format!("kinds = [{}]", kinds)];
        for (name, value) in &self.attributes {
            assignments.push(format!("{} = {}", surql_ident(name), value.to_surql()));
        }

        format!(
            "BEGIN TRANSACTION;\nCREATE type::thing(\"entity\", {}) SET {};\nCOMMIT TRANSACTION;",
            quote(&self.iid),
            assignments.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surql_rendering() {
        let mut stmt = InsertStatement::new(ClassKind::RatioScale, "S1");
        stmt.push("revisionNumber", Literal::Number(2.0));
        stmt.push("name", Literal::text("gram"));
        stmt.push("isDeprecated", Literal::Bool(false));

        let sql = stmt.to_surql();
        assert!(sql.contains(r#"CREATE type::thing("entity", "S1")"#));
        assert!(sql.contains(r#"kinds = ["RatioScale", "MeasurementScale", "DefinedThing", "Thing"]"#));
        assert!(sql.contains("revisionNumber = 2"));
        assert!(sql.contains(r#"name = "gram""#));
        assert!(sql.contains(r#"isDeprecated = "false""#));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut stmt = InsertStatement::new(ClassKind::Option, "O1");
        stmt.push("name", Literal::text("Baseline"));
        assert_eq!(stmt.attribute("name"), Some(&Literal::text("Baseline")));
        assert!(!stmt.has_attribute("shortName"));
    }
}
