//! Configuration management for emgraph.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `emgraph.toml` file
//! 3. User config `~/.config/emgraph/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::migration::{InputFile, Manifest};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Graph database connection.
    pub graph: GraphConfig,

    /// Relationship staging between the two phases.
    pub staging: StagingConfig,

    /// Inputs and retry behaviour.
    pub migration: MigrationConfig,

    /// Mass budget resolution.
    pub budget: BudgetConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./emgraph.toml` (project local)
    /// 2. `~/.config/emgraph/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// `~/.config/emgraph/config.toml` or the platform equivalent.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join("config.toml"))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("EMGRAPH_DB_PATH") {
            self.graph.db_path = path;
        }
        if let Ok(ns) = std::env::var("EMGRAPH_NAMESPACE") {
            self.graph.namespace = ns;
        }
        if let Ok(db) = std::env::var("EMGRAPH_DATABASE") {
            self.graph.database = db;
        }
        if let Ok(file) = std::env::var("EMGRAPH_STAGING_FILE") {
            self.staging.file = file;
        }
        if let Ok(margin) = std::env::var("EMGRAPH_SYSTEM_MARGIN") {
            if let Ok(n) = margin.parse() {
                self.budget.system_margin = n;
            }
        }
        if let Ok(attempts) = std::env::var("EMGRAPH_MAX_ATTEMPTS") {
            if let Ok(n) = attempts.parse() {
                self.migration.retry.max_attempts = n;
            }
        }
    }

    /// Reject values no run could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.migration.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "migration.retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.migration.retry.initial_backoff_ms > self.migration.retry.max_backoff_ms {
            return Err(ConfigError::Invalid(
                "migration.retry.initial_backoff_ms exceeds max_backoff_ms".to_string(),
            ));
        }
        for (name, value) in [
            ("budget.system_margin", self.budget.system_margin),
            ("budget.default_margin", self.budget.default_margin),
            ("budget.default_quantity", self.budget.default_quantity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        if self.budget.tag_relation.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "budget.tag_relation must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Inputs as a manifest, in configured order.
    pub fn manifest(&self) -> Manifest {
        Manifest::new(self.migration.inputs.clone())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Graph database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directory of the embedded database.
    pub db_path: String,

    pub namespace: String,

    pub database: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

/// Relationship staging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingConfig {
    /// Staging file path.
    pub file: String,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_STAGING_FILE.to_string(),
        }
    }
}

impl StagingConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.file)
    }
}

/// Migration configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Input files, migrated in this order.
    pub inputs: Vec<InputFile>,

    pub retry: RetryConfig,
}

/// Transaction retry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_backoff_ms: DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: DEFAULT_MAX_BACKOFF_MS,
        }
    }
}

/// Mass budget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Relation from an Option to the value sets in its budget.
    pub tag_relation: String,

    /// System margin in percent.
    pub system_margin: f64,

    pub default_quantity: f64,

    /// Equipment margin in percent.
    pub default_margin: f64,

    pub default_scale: String,

    /// Parameter type names that identify mass, quantity and margin parameters.
    pub mass_type: String,
    pub quantity_type: String,
    pub margin_type: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            tag_relation: DEFAULT_BUDGET_TAG.to_string(),
            system_margin: DEFAULT_SYSTEM_MARGIN,
            default_quantity: DEFAULT_QUANTITY,
            default_margin: DEFAULT_MARGIN,
            default_scale: DEFAULT_SCALE.to_string(),
            mass_type: DEFAULT_MASS_TYPE.to_string(),
            quantity_type: DEFAULT_QUANTITY_TYPE.to_string(),
            margin_type: DEFAULT_MARGIN_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.graph.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.staging.file, DEFAULT_STAGING_FILE);
        assert_eq!(config.migration.retry.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.budget.system_margin, DEFAULT_SYSTEM_MARGIN);
        assert!(config.migration.inputs.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[graph]"));
        assert!(toml_str.contains("[staging]"));
        assert!(toml_str.contains("[migration.retry]"));
        assert!(toml_str.contains("[budget]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.budget.tag_relation, DEFAULT_BUDGET_TAG);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[graph]
namespace = "strathcube"

[[migration.inputs]]
file = "af90770c-1282-4be3-833f-bf0ed9539b9a"
base_dir = "datasets/strathcube_it5/EngineeringModels/Iterations"
label = "iteration 5"

[[migration.inputs]]
file = "SiteDirectory"
base_dir = "datasets/strathcube_it5"

[budget]
system_margin = 15.0
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.graph.namespace, "strathcube");
        assert_eq!(config.graph.database, DEFAULT_DATABASE);
        assert_eq!(config.budget.system_margin, 15.0);
        assert_eq!(config.budget.default_margin, DEFAULT_MARGIN);

        let manifest = config.manifest();
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.inputs[0].display_name(), "iteration 5");
        assert_eq!(
            manifest.inputs[1].path(),
            PathBuf::from("datasets/strathcube_it5/SiteDirectory.json")
        );
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = Config::default();
        config.migration.retry.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_negative_margin() {
        let mut config = Config::default();
        config.budget.system_margin = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
