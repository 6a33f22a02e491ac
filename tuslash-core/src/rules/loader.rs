//! Rules file loader

use std::fs;
use std::path::Path;

use crate::error::{ConjugationError, Result};
use crate::rules::config::RulesConfig;
use crate::rules::runtime::RuleSet;

/// Parse a rules configuration from TOML text
pub fn parse_config(toml_str: &str) -> Result<RulesConfig> {
    toml::from_str(toml_str)
        .map_err(|e| ConjugationError::Configuration(format!("failed to parse rules: {e}")))
}

impl RuleSet {
    /// Load rules from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = parse_config(toml_str)?;
        Self::from_config(&config)
    }

    /// Load rules from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let wrap = |error: String| ConjugationError::ConfigurationFile {
            path: path.display().to_string(),
            error,
        };

        let content = fs::read_to_string(path).map_err(|e| wrap(e.to_string()))?;
        let config: RulesConfig = toml::from_str(&content).map_err(|e| wrap(e.to_string()))?;
        config.validate().map_err(wrap)?;

        Self::from_config(&config)
    }
}
