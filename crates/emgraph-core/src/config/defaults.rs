//! Default values for emgraph configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Graph Defaults
// ============================================================================

/// Directory of the embedded graph database.
pub const DEFAULT_DB_PATH: &str = ".emgraph/graph.db";

/// Default database namespace.
pub const DEFAULT_NAMESPACE: &str = "emgraph";

/// Default database name.
pub const DEFAULT_DATABASE: &str = "engineering_model";

// ============================================================================
// Staging Defaults
// ============================================================================

/// File holding relationships staged between the two migration phases.
pub const DEFAULT_STAGING_FILE: &str = ".emgraph/staged-relationships.json";

// ============================================================================
// Retry Defaults
// ============================================================================

/// Attempts per transaction, the first one included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Delay before the first retry.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;

/// Upper bound on the delay between retries.
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 5_000;

// ============================================================================
// Budget Defaults
// ============================================================================

/// Relation linking an Option to the value sets in its mass budget.
pub const DEFAULT_BUDGET_TAG: &str = "includedInMassBudget";

/// System margin applied on top of the summed budget, in percent.
pub const DEFAULT_SYSTEM_MARGIN: f64 = 10.0;

/// Quantity used when an element has no "number of items" parameter.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// Equipment margin used when an element has no "mass margin" parameter, in percent.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Scale assumed when a mass parameter has none.
pub const DEFAULT_SCALE: &str = "kilogram";

/// Parameter type name of mass parameters.
pub const DEFAULT_MASS_TYPE: &str = "mass";

/// Parameter type name of quantity parameters.
pub const DEFAULT_QUANTITY_TYPE: &str = "number of items";

/// Parameter type name of margin parameters.
pub const DEFAULT_MARGIN_TYPE: &str = "mass margin";

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const DEFAULT_CONFIG_FILE: &str = "emgraph.toml";

/// Subdirectory of the user config directory.
pub const DEFAULT_CONFIG_DIR: &str = "emgraph";
