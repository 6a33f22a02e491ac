//! Rule set source management for CLI

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tuslash_core::RuleSet;

use crate::error::CliError;

/// Source of conjugation rules
#[derive(Debug, Clone)]
pub enum RulesSource {
    /// Built-in Qo'rg'oncha rules
    BuiltIn,
    /// External rules file
    External {
        /// Path to the rules file
        path: PathBuf,
    },
}

impl RulesSource {
    /// Pick the external file when one is given
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => RulesSource::External { path },
            None => RulesSource::BuiltIn,
        }
    }

    /// Get the display name for the rules source
    pub fn display_name(&self) -> String {
        match self {
            RulesSource::BuiltIn => "Built-in: Qo'rg'oncha".to_string(),
            RulesSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the rule set
    pub fn load(&self) -> Result<Arc<RuleSet>> {
        match self {
            RulesSource::BuiltIn => Ok(RuleSet::builtin()),
            RulesSource::External { path } => {
                let rules = RuleSet::from_file(path)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                log::info!("Loaded rules '{}' ({})", rules.name(), rules.code());
                Ok(Arc::new(rules))
            }
        }
    }
}
