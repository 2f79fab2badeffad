//! Budget reports.

use serde::Serialize;

use super::units::MassUnit;

/// Where a quantity or margin came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueSource {
    /// Read from a parameter value set.
    Parameter,
    /// No matching parameter; the configured default applies.
    Default,
    /// The parameter is option-dependent but has no value set for this
    /// Option, so the default applies.
    OptionFallback,
}

/// A quantity or margin together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolved {
    pub value: f64,
    pub source: ValueSource,
}

/// One contributing value set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Iid of the tagged value set.
    pub value_set: String,
    /// Name of the element owning the mass parameter.
    pub element: Option<String>,
    /// Published mass of one unit, in `unit`.
    pub published: f64,
    pub unit: MassUnit,
    pub quantity: Resolved,
    /// Equipment margin in percent.
    pub margin: Resolved,
    /// `published * quantity * (1 + margin / 100)`, in kilograms when the
    /// unit is known.
    pub total: f64,
}

/// A tagged value set that could not contribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unresolved {
    pub value_set: String,
    pub reason: String,
}

/// Mass budget of one Option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub option: String,
    pub option_name: Option<String>,
    pub line_items: Vec<LineItem>,
    /// Sum of line items, equipment margins included.
    pub total: f64,
    /// System margin in percent.
    pub system_margin: f64,
    pub total_with_system_margin: f64,
    /// Value sets whose scale is not a known mass unit, summed as-is.
    pub unconverted_units: Vec<String>,
    pub unresolved: Vec<Unresolved>,
}

impl BudgetReport {
    /// Whether any line needed a fallback or could not be converted.
    pub fn has_warnings(&self) -> bool {
        !self.unconverted_units.is_empty()
            || !self.unresolved.is_empty()
            || self.line_items.iter().any(|item| {
                item.quantity.source == ValueSource::OptionFallback
                    || item.margin.source == ValueSource::OptionFallback
            })
    }

    pub fn display_name(&self) -> &str {
        self.option_name.as_deref().unwrap_or(&self.option)
    }
}
