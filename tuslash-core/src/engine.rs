//! Conjugation engine
//!
//! Orchestrates classification, harmony and suffix lookup into the six
//! person/number forms of a root. The engine holds only an immutable
//! `RuleSet`; every call is independent of every other call.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::pipeline::{ConjugatedRow, RootPair};
use crate::rules::RuleSet;
use crate::types::{ConjugationSet, HarmonicVowel, Register, StemForms};

/// Intermediate decisions taken for one root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub register: Register,
    pub stems: StemForms,
    /// Only set when the selected pattern is harmony-governed
    pub harmonic_vowel: Option<HarmonicVowel>,
}

/// Root → six-form mapping per register
#[derive(Debug, Clone)]
pub struct ConjugationEngine {
    rules: Arc<RuleSet>,
}

impl ConjugationEngine {
    /// Create an engine with the built-in rules
    pub fn new() -> Self {
        Self::with_rules(RuleSet::builtin())
    }

    /// Create an engine with a specific rule set
    pub fn with_rules(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a root and resolve harmony for a register
    pub fn analyze(&self, root: &str, register: Register) -> Result<Analysis> {
        let stems = self.rules.classifier().classify(root)?;
        let pattern = self.rules.suffixes().pattern(register, stems.class);
        let harmonic_vowel = pattern
            .needs_harmony()
            .then(|| self.rules.harmony().resolve(&stems.plain));

        Ok(Analysis {
            register,
            stems,
            harmonic_vowel,
        })
    }

    /// Conjugate a root in a register
    pub fn conjugate(&self, root: &str, register: Register) -> Result<ConjugationSet> {
        let analysis = self.analyze(root, register)?;
        let rules = self.rules.suffixes().suffixes(register, &analysis.stems);
        let forms = rules.map(|rule| rule.apply(&analysis.stems, analysis.harmonic_vowel));

        Ok(ConjugationSet::new(register, forms))
    }

    /// Conjugate a formal/dialectal root pair into one output row
    pub fn conjugate_pair(&self, pair: &RootPair) -> Result<ConjugatedRow> {
        let formal = self.conjugate(&pair.formal, Register::Formal)?;
        let dialectal = self.conjugate(&pair.dialectal, Register::Dialectal)?;

        Ok(ConjugatedRow {
            formal_root: pair.formal.clone(),
            dialectal_root: pair.dialectal.clone(),
            formal,
            dialectal,
        })
    }
}

impl Default for ConjugationEngine {
    fn default() -> Self {
        Self::new()
    }
}
