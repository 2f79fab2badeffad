//! Staged relationship descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::literal::quote;
use super::surql_ident;

/// The two semantic families of relationship in the graph schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Owner to owned child. The child's lifetime is bounded by the owner.
    Containment,
    /// Non-owning pointer to a peer.
    Reference,
}

impl RelationKind {
    /// Relation label prefix used by the pre-loaded graph schema.
    pub fn prefix(&self) -> &'static str {
        match self {
            RelationKind::Containment => "Containement",
            RelationKind::Reference => "Reference",
        }
    }

    /// Role names played by the owner/referrer and the owned/referee.
    pub fn roles(&self, name: &str) -> (String, String) {
        match self {
            RelationKind::Containment => {
                (format!("contains_{}", name), format!("iscontained_{}", name))
            }
            RelationKind::Reference => (format!("refers_{}", name), format!("isrefered_{}", name)),
        }
    }

    /// Full relation label for a relation name, e.g. `Reference_owner`.
    pub fn label(&self, name: &str) -> String {
        format!("{}_{}", self.prefix(), name)
    }

    /// Recover the kind from a relation label.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.starts_with("Containement_") {
            Some(RelationKind::Containment)
        } else if label.starts_with("Reference_") {
            Some(RelationKind::Reference)
        } else {
            None
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Containment => f.write_str("containment"),
            RelationKind::Reference => f.write_str("reference"),
        }
    }
}

/// One edge waiting to be committed between two `(class, iid)` endpoints.
///
/// Classes are kept as strings because a staging file written by an older
/// run may name classes this build does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    pub relationship: String,
    pub role1: String,
    pub class1: String,
    pub player1: String,
    pub role2: String,
    pub class2: String,
    pub player2: String,
}

impl RelationshipDescriptor {
    /// Build a descriptor for relation `name` of the given kind.
    pub fn new(
        kind: RelationKind,
        name: &str,
        class1: impl Into<String>,
        player1: impl Into<String>,
        class2: impl Into<String>,
        player2: impl Into<String>,
    ) -> Self {
        let (role1, role2) = kind.roles(name);
        Self {
            relationship: kind.label(name),
            role1,
            class1: class1.into(),
            player1: player1.into(),
            role2,
            class2: class2.into(),
            player2: player2.into(),
        }
    }

    /// Containment or reference, if the label follows the schema convention.
    pub fn kind(&self) -> Option<RelationKind> {
        RelationKind::from_label(&self.relationship)
    }

    /// Render the match-match-relate transaction for this descriptor.
    ///
    /// Both endpoints are looked up by iid and class (including subclasses);
    /// when either is missing the transaction throws and nothing is written.
    pub fn to_surql(&self) -> String {
        format!(
            "BEGIN TRANSACTION;\n\
             LET $player1 = (SELECT VALUE id FROM type::thing(\"entity\", {p1}) WHERE kinds CONTAINS {c1})[0];\n\
             LET $player2 = (SELECT VALUE id FROM type::thing(\"entity\", {p2}) WHERE kinds CONTAINS {c2})[0];\n\
             IF $player1 = NONE OR $player2 = NONE {{ THROW {msg}; }};\n\
             RELATE $player1->{rel}->$player2 SET role1 = {r1}, role2 = {r2};\n\
             COMMIT TRANSACTION;",
            p1 = quote(&self.player1),
            c1 = quote(&self.class1),
            p2 = quote(&self.player2),
            c2 = quote(&self.class2),
            msg = quote(&format!("{} {}", DANGLING_MARKER, self)),
            rel = surql_ident(&self.relationship),
            r1 = quote(&self.role1),
            r2 = quote(&self.role2),
        )
    }
}

/// Prefix of the error thrown by a relationship transaction with a missing endpoint.
pub const DANGLING_MARKER: &str = "dangling reference:";

impl fmt::Display for RelationshipDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}: {} {}, {}: {} {})",
            self.relationship,
            self.role1,
            self.class1,
            self.player1,
            self.role2,
            self.class2,
            self.player2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_roles() {
        let d = RelationshipDescriptor::new(
            RelationKind::Reference,
            "owner",
            "Parameter",
            "P1",
            "DomainOfExpertise",
            "D1",
        );
        assert_eq!(d.relationship, "Reference_owner");
        assert_eq!(d.role1, "refers_owner");
        assert_eq!(d.role2, "isrefered_owner");
        assert_eq!(d.kind(), Some(RelationKind::Reference));
    }

    #[test]
    fn test_containment_roles() {
        let d = RelationshipDescriptor::new(
            RelationKind::Containment,
            "parameter",
            "ElementDefinition",
            "E1",
            "Parameter",
            "P1",
        );
        assert_eq!(d.relationship, "Containement_parameter");
        assert_eq!(d.role1, "contains_parameter");
        assert_eq!(d.role2, "iscontained_parameter");
        assert_eq!(d.kind(), Some(RelationKind::Containment));
    }

    #[test]
    fn test_surql_matches_both_endpoints() {
        let d = RelationshipDescriptor::new(
            RelationKind::Reference,
            "scale",
            "Parameter",
            "P1",
            "MeasurementScale",
            "S1",
        );
        let sql = d.to_surql();
        assert!(sql.starts_with("BEGIN TRANSACTION;"));
        assert!(sql.contains(r#"type::thing("entity", "P1") WHERE kinds CONTAINS "Parameter""#));
        assert!(sql.contains(r#"WHERE kinds CONTAINS "MeasurementScale""#));
        assert!(sql.contains("RELATE $player1->Reference_scale->$player2"));
        assert!(sql.trim_end().ends_with("COMMIT TRANSACTION;"));
    }

    #[test]
    fn test_unknown_label_has_no_kind() {
        let mut d = RelationshipDescriptor::new(
            RelationKind::Reference,
            "owner",
            "Parameter",
            "P1",
            "DomainOfExpertise",
            "D1",
        );
        d.relationship = "includedInMassBudget".to_string();
        assert_eq!(d.kind(), None);
    }
}
