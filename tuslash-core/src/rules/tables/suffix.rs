//! Suffix patterns keyed by register and stem class

use std::collections::HashMap;

use crate::rules::config::{PatternRules, RegisterRules, SuffixRuleConfig, VOWEL_PLACEHOLDER};
use crate::types::{HarmonicVowel, Register, StemClass, StemForms, StemVariant};

/// One suffix attached to a chosen stem variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub stem: StemVariant,
    /// Suffix text, possibly containing the `{v}` placeholder
    pub template: String,
}

impl SuffixRule {
    /// Create a rule
    pub fn new(stem: StemVariant, template: impl Into<String>) -> Self {
        Self {
            stem,
            template: template.into(),
        }
    }

    /// Suffix with the harmonic vowel filled in
    pub fn render(&self, vowel: Option<HarmonicVowel>) -> String {
        match vowel {
            Some(v) => self.template.replace(VOWEL_PLACEHOLDER, v.as_str()),
            None => self.template.clone(),
        }
    }

    /// Surface form for the given stems
    pub fn apply(&self, stems: &StemForms, vowel: Option<HarmonicVowel>) -> String {
        let mut form = stems.get(self.stem).to_string();
        form.push_str(&self.render(vowel));
        form
    }
}

impl From<&SuffixRuleConfig> for SuffixRule {
    fn from(config: &SuffixRuleConfig) -> Self {
        Self::new(config.stem, config.suffix.clone())
    }
}

/// Six-slot suffix pattern with 3pl overrides
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    harmony: bool,
    persons: [SuffixRule; 5],
    third_plural: SuffixRule,
    /// Sorted longest ending first
    third_plural_by_ending: Vec<(String, SuffixRule)>,
    third_plural_exceptions: HashMap<String, SuffixRule>,
}

impl SuffixPattern {
    /// Whether suffixes depend on the harmonic vowel
    pub fn needs_harmony(&self) -> bool {
        self.harmony
    }

    /// 3pl rule for a plain root: exception, then ending, then default
    pub fn third_plural_for(&self, root: &str) -> &SuffixRule {
        if let Some(rule) = self.third_plural_exceptions.get(root) {
            return rule;
        }
        self.third_plural_by_ending
            .iter()
            .find(|(ending, _)| root.ends_with(ending.as_str()))
            .map(|(_, rule)| rule)
            .unwrap_or(&self.third_plural)
    }

    /// Ordered rules for slots 1sg..3pl
    pub fn rules_for(&self, root: &str) -> [&SuffixRule; 6] {
        let [p1, p2, p3, p4, p5] = &self.persons;
        [p1, p2, p3, p4, p5, self.third_plural_for(root)]
    }

    /// Build from a validated configuration section
    pub(crate) fn from_config(config: &PatternRules) -> Self {
        let persons: [SuffixRule; 5] =
            std::array::from_fn(|i| SuffixRule::from(&config.persons[i]));

        let mut third_plural_by_ending: Vec<(String, SuffixRule)> = config
            .third_plural_by_ending
            .iter()
            .map(|(ending, rule)| (ending.clone(), SuffixRule::from(rule)))
            .collect();
        third_plural_by_ending.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        Self {
            harmony: config.harmony,
            persons,
            third_plural: SuffixRule::from(&config.third_plural),
            third_plural_by_ending,
            third_plural_exceptions: config
                .third_plural_exceptions
                .iter()
                .map(|(root, rule)| (root.clone(), SuffixRule::from(rule)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct RegisterPatterns {
    vowel_final: SuffixPattern,
    liquid_final: SuffixPattern,
    other_consonant: SuffixPattern,
}

impl RegisterPatterns {
    fn from_config(config: &RegisterRules) -> Self {
        let consonant_final = SuffixPattern::from_config(&config.consonant_final);
        Self {
            vowel_final: SuffixPattern::from_config(&config.vowel_final),
            liquid_final: config
                .liquid_final
                .as_ref()
                .map(SuffixPattern::from_config)
                .unwrap_or_else(|| consonant_final.clone()),
            other_consonant: consonant_final,
        }
    }

    fn get(&self, class: StemClass) -> &SuffixPattern {
        match class {
            StemClass::VowelFinal => &self.vowel_final,
            StemClass::LiquidFinal => &self.liquid_final,
            StemClass::OtherConsonant => &self.other_consonant,
        }
    }
}

/// Lookup of suffix patterns by (register, stem class)
#[derive(Debug, Clone)]
pub struct SuffixTable {
    formal: RegisterPatterns,
    dialectal: RegisterPatterns,
}

impl SuffixTable {
    /// Pattern for a register and stem class
    pub fn pattern(&self, register: Register, class: StemClass) -> &SuffixPattern {
        match register {
            Register::Formal => self.formal.get(class),
            Register::Dialectal => self.dialectal.get(class),
        }
    }

    /// Ordered suffix rules for a classified root
    pub fn suffixes(&self, register: Register, stems: &StemForms) -> [&SuffixRule; 6] {
        self.pattern(register, stems.class).rules_for(&stems.plain)
    }

    /// Build from validated register sections
    pub(crate) fn from_config(formal: &RegisterRules, dialectal: &RegisterRules) -> Self {
        Self {
            formal: RegisterPatterns::from_config(formal),
            dialectal: RegisterPatterns::from_config(dialectal),
        }
    }
}
