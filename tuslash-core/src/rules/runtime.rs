//! Runtime rule set
//!
//! Bridges a validated `RulesConfig` and the lookup tables used by the engine.

use std::sync::{Arc, OnceLock};

use crate::error::{ConjugationError, Result};
use crate::rules::config::RulesConfig;
use crate::rules::tables::{HarmonyResolver, StemClassifier, SuffixTable};

/// Built-in rules, built on first access
static BUILTIN: OnceLock<Arc<RuleSet>> = OnceLock::new();

/// Immutable bundle of the classifier, harmony resolver and suffix table
#[derive(Debug, Clone)]
pub struct RuleSet {
    code: String,
    name: String,
    classifier: StemClassifier,
    harmony: HarmonyResolver,
    suffixes: SuffixTable,
}

impl RuleSet {
    /// Built-in Qo'rg'oncha rules
    pub fn builtin() -> Arc<RuleSet> {
        BUILTIN
            .get_or_init(|| Arc::new(Self::build(&RulesConfig::default())))
            .clone()
    }

    /// Create from configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate().map_err(ConjugationError::Configuration)?;
        Ok(Self::build(config))
    }

    /// Build tables from an already validated configuration
    fn build(config: &RulesConfig) -> Self {
        let stems = &config.stems;
        let classifier = stems.exceptions.iter().fold(
            StemClassifier::new(
                stems.vowel_endings.clone(),
                stems.liquid_endings.clone(),
                stems.vowel_link.clone(),
                stems.consonant_link.clone(),
            ),
            |classifier, (root, exception)| {
                classifier.with_exception(root.clone(), exception.extended.clone(), exception.class)
            },
        );

        Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            classifier,
            harmony: HarmonyResolver::new(config.harmony.front_codas.clone()),
            suffixes: SuffixTable::from_config(&config.formal, &config.dialectal),
        }
    }

    /// Rule set code, e.g. `uz-qorgoncha`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable rule set name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classifier(&self) -> &StemClassifier {
        &self.classifier
    }

    pub fn harmony(&self) -> &HarmonyResolver {
        &self.harmony
    }

    pub fn suffixes(&self) -> &SuffixTable {
        &self.suffixes
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::build(&RulesConfig::default())
    }
}
