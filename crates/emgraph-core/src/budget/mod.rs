//! Mass budgets over the migrated graph.
//!
//! [`BudgetTagger`] links each Option to the mass value sets that belong in
//! its budget; [`BudgetResolver`] follows those links and sums the
//! contributions, applying quantities, margins and unit conversion.

mod error;
mod report;
mod resolver;
mod tagging;
mod units;

pub use error::BudgetError;
pub use report::{BudgetReport, LineItem, Resolved, Unresolved, ValueSource};
pub use resolver::BudgetResolver;
pub use tagging::{BudgetTagger, TaggingReport, BUDGET_ITEM_ROLE, BUDGET_ROLE};
pub use units::MassUnit;
