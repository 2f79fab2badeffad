//! Derivation of budget tags.
//!
//! A value set belongs to an Option's mass budget when its parameter is of
//! the mass type. Option-dependent value sets only count for the Option
//! they were set for; the others count for every Option.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::BudgetConfig;
use crate::graph::{Direction, GraphEntity, GraphReader, GraphStore};
use crate::model::{ClassKind, RelationshipDescriptor};

use super::error::BudgetError;
use super::resolver::{containment, reference};

/// Role of the Option in a budget tag edge.
pub const BUDGET_ROLE: &str = "massBudget";

/// Role of the value set in a budget tag edge.
pub const BUDGET_ITEM_ROLE: &str = "budgetItem";

/// Outcome of a tagging pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaggingReport {
    /// Options that were considered.
    pub options: usize,
    /// Mass parameters found.
    pub mass_parameters: usize,
    /// New tag edges written.
    pub tagged: usize,
    /// Tags that already existed.
    pub existing: usize,
}

/// Writes the budget tag edges the resolver walks.
pub struct BudgetTagger<G> {
    graph: Arc<G>,
    config: BudgetConfig,
}

impl<G: GraphReader + GraphStore> BudgetTagger<G> {
    pub fn new(graph: Arc<G>) -> Self {
        Self::with_config(graph, BudgetConfig::default())
    }

    pub fn with_config(graph: Arc<G>, config: BudgetConfig) -> Self {
        Self { graph, config }
    }

    /// Build the tag edge between an Option and a value set.
    pub fn tag_descriptor(&self, option: &str, value_set: &str) -> RelationshipDescriptor {
        RelationshipDescriptor {
            relationship: self.config.tag_relation.clone(),
            role1: BUDGET_ROLE.to_string(),
            class1: ClassKind::Option.as_str().to_string(),
            player1: option.to_string(),
            role2: BUDGET_ITEM_ROLE.to_string(),
            class2: ClassKind::ParameterValueSetBase.as_str().to_string(),
            player2: value_set.to_string(),
        }
    }

    /// Tag the mass value sets of `option`, or of every Option when `None`.
    ///
    /// Tags already present are left alone, so running this twice does not
    /// duplicate edges.
    pub async fn tag(&self, option: Option<&str>) -> Result<TaggingReport, BudgetError> {
        let options: Vec<String> = match option {
            Some(iid) => {
                let entity = self
                    .graph
                    .entity(iid)
                    .await?
                    .ok_or_else(|| BudgetError::OptionNotFound(iid.to_string()))?;
                if entity.class != ClassKind::Option.as_str() {
                    return Err(BudgetError::NotAnOption {
                        iid: entity.iid,
                        class: entity.class,
                    });
                }
                vec![entity.iid]
            }
            None => self
                .graph
                .entities(ClassKind::Option)
                .await?
                .into_iter()
                .map(|o| o.iid)
                .collect(),
        };

        let mut report = TaggingReport {
            options: options.len(),
            ..TaggingReport::default()
        };

        let mut existing: HashSet<(String, String)> = HashSet::new();
        for option in &options {
            for value_set in self
                .graph
                .related(option, &self.config.tag_relation, Direction::Outgoing)
                .await?
            {
                existing.insert((option.clone(), value_set.iid));
            }
        }

        for parameter in self.mass_parameters().await? {
            report.mass_parameters += 1;
            let option_dependent = parameter.flag("isOptionDependent") == Some(true);
            let value_sets = self
                .graph
                .related(&parameter.iid, &containment("valueSet"), Direction::Outgoing)
                .await?;

            for value_set in value_sets {
                let targets: Vec<&String> = if option_dependent {
                    let actual = self
                        .graph
                        .related(&value_set.iid, &reference("actualOption"), Direction::Outgoing)
                        .await?;
                    options
                        .iter()
                        .filter(|o| actual.iter().any(|a| &a.iid == *o))
                        .collect()
                } else {
                    options.iter().collect()
                };

                for option in targets {
                    if !existing.insert((option.clone(), value_set.iid.clone())) {
                        report.existing += 1;
                        continue;
                    }
                    let descriptor = self.tag_descriptor(option, &value_set.iid);
                    self.graph.insert_relationship(&descriptor).await?;
                    debug!(%descriptor, "Tagged");
                    report.tagged += 1;
                }
            }
        }

        info!(
            options = report.options,
            mass_parameters = report.mass_parameters,
            tagged = report.tagged,
            existing = report.existing,
            "Budget tagging finished"
        );
        Ok(report)
    }

    async fn mass_parameters(&self) -> Result<Vec<GraphEntity>, BudgetError> {
        let mut found = Vec::new();
        for parameter in self.graph.entities(ClassKind::Parameter).await? {
            let types = self
                .graph
                .related(&parameter.iid, &reference("parameterType"), Direction::Outgoing)
                .await?;
            if types
                .iter()
                .any(|t| t.text("name") == Some(self.config.mass_type.as_str()))
            {
                found.push(parameter);
            }
        }
        Ok(found)
    }
}
