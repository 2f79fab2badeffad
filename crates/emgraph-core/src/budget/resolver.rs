//! Mass budget resolution.
//!
//! Walks the migrated graph from an Option to the mass value sets tagged
//! for its budget, and from each value set back to the owning element to
//! find the quantity and margin that apply.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::BudgetConfig;
use crate::graph::{Direction, GraphEntity, GraphReader};
use crate::model::{ClassKind, RelationKind};

use super::error::BudgetError;
use super::report::{BudgetReport, LineItem, Resolved, Unresolved, ValueSource};
use super::units::MassUnit;

pub(crate) fn containment(name: &str) -> String {
    RelationKind::Containment.label(name)
}

pub(crate) fn reference(name: &str) -> String {
    RelationKind::Reference.label(name)
}

fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Computes per-Option mass budgets. Read-only.
pub struct BudgetResolver<R> {
    graph: Arc<R>,
    config: BudgetConfig,
}

impl<R: GraphReader> BudgetResolver<R> {
    pub fn new(graph: Arc<R>) -> Self {
        Self::with_config(graph, BudgetConfig::default())
    }

    pub fn with_config(graph: Arc<R>, config: BudgetConfig) -> Self {
        Self { graph, config }
    }

    /// Every Option in the graph.
    pub async fn options(&self) -> Result<Vec<GraphEntity>, BudgetError> {
        Ok(self.graph.entities(ClassKind::Option).await?)
    }

    /// Budgets of every Option, in iid order.
    pub async fn resolve_all(&self) -> Result<Vec<BudgetReport>, BudgetError> {
        let options = self.options().await?;
        info!("{} design options found", options.len());

        let mut reports = Vec::with_capacity(options.len());
        for option in options {
            reports.push(self.resolve(&option.iid).await?);
        }
        Ok(reports)
    }

    /// Budget of the Option with iid `option`.
    pub async fn resolve(&self, option: &str) -> Result<BudgetReport, BudgetError> {
        let entity = self
            .graph
            .entity(option)
            .await?
            .ok_or_else(|| BudgetError::OptionNotFound(option.to_string()))?;
        let is_option = entity
            .class
            .parse::<ClassKind>()
            .is_ok_and(|kind| kind.is_a(ClassKind::Option));
        if !is_option {
            return Err(BudgetError::NotAnOption {
                iid: entity.iid,
                class: entity.class,
            });
        }

        let value_sets = self
            .graph
            .related(option, &self.config.tag_relation, Direction::Outgoing)
            .await?;
        info!(
            option,
            name = entity.text("name"),
            items = value_sets.len(),
            "Resolving mass budget"
        );

        let mut line_items = Vec::new();
        let mut unconverted_units = Vec::new();
        let mut unresolved = Vec::new();
        for value_set in &value_sets {
            match self.line_item(option, value_set).await? {
                Ok(item) => {
                    if !item.unit.is_known() {
                        warn!(value_set = %item.value_set, unit = %item.unit, "Unit not converted to kilograms");
                        unconverted_units.push(format!("{} ({})", item.value_set, item.unit));
                    }
                    debug!(
                        value_set = %item.value_set,
                        element = item.element.as_deref(),
                        published = item.published,
                        unit = %item.unit,
                        quantity = item.quantity.value,
                        margin = item.margin.value,
                        total = item.total,
                        "Budget line"
                    );
                    line_items.push(item);
                }
                Err(skipped) => {
                    warn!(value_set = %skipped.value_set, reason = %skipped.reason, "Value set left out of budget");
                    unresolved.push(skipped);
                }
            }
        }

        let total = round5(line_items.iter().map(|item| item.total).sum());
        let system_margin = self.config.system_margin;
        let total_with_system_margin = round5(total * (1.0 + system_margin / 100.0));

        Ok(BudgetReport {
            option: option.to_string(),
            option_name: entity.text("name").map(str::to_string),
            line_items,
            total,
            system_margin,
            total_with_system_margin,
            unconverted_units,
            unresolved,
        })
    }

    async fn line_item(
        &self,
        option: &str,
        value_set: &GraphEntity,
    ) -> Result<Result<LineItem, Unresolved>, BudgetError> {
        let Some(published) = value_set.number("published") else {
            return Ok(Err(Unresolved {
                value_set: value_set.iid.clone(),
                reason: "no numeric published value".to_string(),
            }));
        };

        let parameter = self
            .first_related(&value_set.iid, &containment("valueSet"), Direction::Incoming)
            .await?;
        let element = match &parameter {
            Some(p) => {
                self.first_related(&p.iid, &containment("parameter"), Direction::Incoming)
                    .await?
            }
            None => None,
        };

        let scale = match &parameter {
            Some(p) => self
                .first_related(&p.iid, &reference("scale"), Direction::Outgoing)
                .await?
                .and_then(|s| s.text("name").map(str::to_string)),
            None => None,
        };
        let unit =
            MassUnit::from_scale_name(scale.as_deref().unwrap_or(&self.config.default_scale));

        let siblings = match &element {
            Some(e) => {
                self.graph
                    .related(&e.iid, &containment("parameter"), Direction::Outgoing)
                    .await?
            }
            None => Vec::new(),
        };
        let quantity = self
            .sibling_value(
                option,
                &siblings,
                &self.config.quantity_type,
                self.config.default_quantity,
            )
            .await?;
        let margin = self
            .sibling_value(
                option,
                &siblings,
                &self.config.margin_type,
                self.config.default_margin,
            )
            .await?;

        let raw = round5(published * quantity.value * (1.0 + margin.value / 100.0));
        let total = unit.to_kilograms(raw);

        Ok(Ok(LineItem {
            value_set: value_set.iid.clone(),
            element: element.and_then(|e| e.text("name").map(str::to_string)),
            published,
            unit,
            quantity,
            margin,
            total,
        }))
    }

    /// Published value of the sibling parameter whose type is `type_name`.
    ///
    /// An option-dependent parameter contributes the value set of `option`;
    /// any other parameter contributes its value set. When several siblings
    /// or value sets qualify, the last one in graph order wins.
    async fn sibling_value(
        &self,
        option: &str,
        siblings: &[GraphEntity],
        type_name: &str,
        default: f64,
    ) -> Result<Resolved, BudgetError> {
        let mut resolved = Resolved {
            value: default,
            source: ValueSource::Default,
        };

        for parameter in siblings {
            let types = self
                .graph
                .related(&parameter.iid, &reference("parameterType"), Direction::Outgoing)
                .await?;
            if !types.iter().any(|t| t.text("name") == Some(type_name)) {
                continue;
            }

            let value_sets = self
                .graph
                .related(&parameter.iid, &containment("valueSet"), Direction::Outgoing)
                .await?;

            let chosen = if parameter.flag("isOptionDependent") == Some(true) {
                let mut found = None;
                for value_set in value_sets {
                    let options = self
                        .graph
                        .related(&value_set.iid, &reference("actualOption"), Direction::Outgoing)
                        .await?;
                    if options.iter().any(|o| o.iid == option) {
                        found = Some(value_set);
                    }
                }
                if found.is_none() {
                    warn!(
                        parameter = %parameter.iid,
                        option,
                        "No '{type_name}' value set for this option, using default {default}"
                    );
                    resolved = Resolved {
                        value: default,
                        source: ValueSource::OptionFallback,
                    };
                    continue;
                }
                found
            } else {
                value_sets.into_iter().last()
            };

            resolved = match chosen.as_ref().and_then(|vs| vs.number("published")) {
                Some(value) => Resolved {
                    value,
                    source: ValueSource::Parameter,
                },
                None => {
                    if let Some(value_set) = &chosen {
                        warn!(
                            value_set = %value_set.iid,
                            "No published '{type_name}', using default {default}"
                        );
                    }
                    Resolved {
                        value: default,
                        source: ValueSource::Default,
                    }
                }
            };
        }

        Ok(resolved)
    }

    async fn first_related(
        &self,
        iid: &str,
        relation: &str,
        direction: Direction,
    ) -> Result<Option<GraphEntity>, BudgetError> {
        Ok(self
            .graph
            .related(iid, relation, direction)
            .await?
            .into_iter()
            .next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round5() {
        assert_eq!(round5(1.234_567_89), 1.23457);
        assert_eq!(round5(2.4), 2.4);
    }

    #[test]
    fn test_labels() {
        assert_eq!(containment("valueSet"), "Containement_valueSet");
        assert_eq!(reference("actualOption"), "Reference_actualOption");
    }
}
