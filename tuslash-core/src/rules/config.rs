//! Configuration structures and validation
//!
//! This module defines the TOML schema for conjugation rules files.
//! `RulesConfig::default()` holds the built-in Qo'rg'oncha rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{StemClass, StemVariant};

/// Placeholder replaced by the harmonic vowel inside suffix templates
pub const VOWEL_PLACEHOLDER: &str = "{v}";

/// Root rules configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    pub stems: Stems,
    pub harmony: Harmony,
    pub formal: RegisterRules,
    pub dialectal: RegisterRules,
}

/// Rule set metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Stem classification configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stems {
    pub vowel_endings: Vec<String>,
    pub liquid_endings: Vec<String>,
    /// Linking sound appended to vowel-final roots
    pub vowel_link: String,
    /// Linking sound appended to consonant-final roots
    pub consonant_link: String,
    /// Whole-root overrides, checked before the ending rules
    #[serde(default)]
    pub exceptions: BTreeMap<String, StemException>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemException {
    pub extended: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<StemClass>,
}

/// Vowel harmony configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmony {
    /// Codas that select the front vowel `e`
    pub front_codas: Vec<String>,
}

/// Suffix patterns of one register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRules {
    pub vowel_final: PatternRules,
    pub consonant_final: PatternRules,
    /// Falls back to `consonant_final` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid_final: Option<PatternRules>,
}

/// Suffix pattern of one (register, stem class) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRules {
    #[serde(default)]
    pub harmony: bool,
    /// 1sg, 2sg, 3sg, 1pl, 2pl
    pub persons: Vec<SuffixRuleConfig>,
    pub third_plural: SuffixRuleConfig,
    /// Keyed by the trailing characters of the plain root
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub third_plural_by_ending: BTreeMap<String, SuffixRuleConfig>,
    /// Keyed by whole root
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub third_plural_exceptions: BTreeMap<String, SuffixRuleConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuffixRuleConfig {
    pub stem: StemVariant,
    pub suffix: String,
}

impl SuffixRuleConfig {
    fn new(stem: StemVariant, suffix: &str) -> Self {
        Self {
            stem,
            suffix: suffix.to_string(),
        }
    }

    fn plain(suffix: &str) -> Self {
        Self::new(StemVariant::Plain, suffix)
    }

    fn extended(suffix: &str) -> Self {
        Self::new(StemVariant::Extended, suffix)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rule_map(items: &[(&str, SuffixRuleConfig)]) -> BTreeMap<String, SuffixRuleConfig> {
    items
        .iter()
        .map(|(key, rule)| (key.to_string(), rule.clone()))
        .collect()
}

impl Default for RulesConfig {
    fn default() -> Self {
        let formal_persons = ["man", "san", "di", "miz", "sizlar"]
            .map(SuffixRuleConfig::extended)
            .to_vec();

        Self {
            metadata: Metadata {
                code: "uz-qorgoncha".to_string(),
                name: "Qo'rg'oncha (Quyichirchiq) sheva".to_string(),
            },
            stems: Stems {
                vowel_endings: strings(&["a", "e", "i"]),
                liquid_endings: strings(&["r", "l"]),
                vowel_link: "y".to_string(),
                consonant_link: "a".to_string(),
                exceptions: [("de", "dey"), ("ye", "yey")]
                    .iter()
                    .map(|(root, extended)| {
                        (
                            root.to_string(),
                            StemException {
                                extended: extended.to_string(),
                                class: None,
                            },
                        )
                    })
                    .collect(),
            },
            harmony: Harmony {
                front_codas: strings(&["il", "er", "el", "ör", "et", "ir"]),
            },
            formal: RegisterRules {
                vowel_final: PatternRules {
                    harmony: false,
                    persons: formal_persons.clone(),
                    third_plural: SuffixRuleConfig::plain("shadi"),
                    third_plural_by_ending: BTreeMap::new(),
                    third_plural_exceptions: rule_map(&[
                        ("de", SuffixRuleConfig::extended("ishadi")),
                        ("ye", SuffixRuleConfig::extended("ishadi")),
                    ]),
                },
                consonant_final: PatternRules {
                    harmony: false,
                    persons: formal_persons,
                    third_plural: SuffixRuleConfig::plain("ishadi"),
                    third_plural_by_ending: BTreeMap::new(),
                    third_plural_exceptions: BTreeMap::new(),
                },
                liquid_final: None,
            },
            dialectal: RegisterRules {
                vowel_final: PatternRules {
                    harmony: false,
                    persons: ["m", "sn", "di", "mz", "sler"]
                        .map(SuffixRuleConfig::extended)
                        .to_vec(),
                    third_plural: SuffixRuleConfig::plain("shadi"),
                    third_plural_by_ending: rule_map(&[
                        ("a", SuffixRuleConfig::plain("shadi")),
                        ("e", SuffixRuleConfig::plain("shedi")),
                        ("i", SuffixRuleConfig::plain("shadi")),
                    ]),
                    third_plural_exceptions: rule_map(&[
                        ("di", SuffixRuleConfig::extended("ishedi")),
                        ("ji", SuffixRuleConfig::extended("ishedi")),
                    ]),
                },
                consonant_final: PatternRules {
                    harmony: true,
                    persons: ["{v}m", "{v}sn", "{v}di", "{v}mz", "{v}sl{v}r"]
                        .map(SuffixRuleConfig::plain)
                        .to_vec(),
                    third_plural: SuffixRuleConfig::plain("ish{v}di"),
                    third_plural_by_ending: BTreeMap::new(),
                    third_plural_exceptions: BTreeMap::new(),
                },
                liquid_final: None,
            },
        }
    }
}

impl RulesConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if self.metadata.name.trim().is_empty() {
            return Err("metadata.name must not be empty".to_string());
        }

        self.stems.validate()?;

        if self.harmony.front_codas.is_empty() {
            return Err("harmony.front_codas must list at least one coda".to_string());
        }
        if self.harmony.front_codas.iter().any(|c| c.is_empty()) {
            return Err("harmony.front_codas contains an empty coda".to_string());
        }

        self.formal.validate("formal")?;
        self.dialectal.validate("dialectal")?;

        Ok(())
    }
}

impl Stems {
    fn validate(&self) -> Result<(), String> {
        if self.vowel_endings.is_empty() || self.vowel_endings.iter().any(|e| e.is_empty()) {
            return Err("stems.vowel_endings must be non-empty strings".to_string());
        }
        if self.liquid_endings.is_empty() || self.liquid_endings.iter().any(|e| e.is_empty()) {
            return Err("stems.liquid_endings must be non-empty strings".to_string());
        }
        if self.vowel_link.is_empty() || self.consonant_link.is_empty() {
            return Err("stems.vowel_link and stems.consonant_link must not be empty".to_string());
        }
        for (root, exception) in &self.exceptions {
            if root.is_empty() {
                return Err("stems.exceptions contains an empty root".to_string());
            }
            if exception.extended.is_empty() {
                return Err(format!("stems.exceptions.{root}: extended stem is empty"));
            }
        }
        Ok(())
    }
}

impl RegisterRules {
    fn validate(&self, register: &str) -> Result<(), String> {
        self.vowel_final
            .validate(&format!("{register}.vowel_final"))?;
        self.consonant_final
            .validate(&format!("{register}.consonant_final"))?;
        if let Some(liquid) = &self.liquid_final {
            liquid.validate(&format!("{register}.liquid_final"))?;
        }
        Ok(())
    }
}

impl PatternRules {
    fn validate(&self, section: &str) -> Result<(), String> {
        if self.persons.len() != 5 {
            return Err(format!(
                "{section}.persons must list exactly 5 rules (1sg..2pl), found {}",
                self.persons.len()
            ));
        }

        let third_plural = std::iter::once(("third_plural".to_string(), &self.third_plural));
        let by_ending = self
            .third_plural_by_ending
            .iter()
            .map(|(ending, rule)| (format!("third_plural_by_ending.{ending}"), rule));
        let exceptions = self
            .third_plural_exceptions
            .iter()
            .map(|(root, rule)| (format!("third_plural_exceptions.{root}"), rule));
        let persons = self
            .persons
            .iter()
            .enumerate()
            .map(|(i, rule)| (format!("persons[{i}]"), rule));

        for (name, rule) in persons.chain(third_plural).chain(by_ending).chain(exceptions) {
            check_template(&rule.suffix, self.harmony)
                .map_err(|reason| format!("{section}.{name}: {reason}"))?;
        }

        if self.third_plural_by_ending.keys().any(|k| k.is_empty()) {
            return Err(format!("{section}.third_plural_by_ending has an empty key"));
        }
        if self.third_plural_exceptions.keys().any(|k| k.is_empty()) {
            return Err(format!("{section}.third_plural_exceptions has an empty key"));
        }

        Ok(())
    }
}

/// Check placeholders used by a suffix template
fn check_template(template: &str, harmony: bool) -> Result<(), String> {
    let without_vowel = template.replace(VOWEL_PLACEHOLDER, "");
    if without_vowel.contains('{') || without_vowel.contains('}') {
        return Err(format!("unknown placeholder in suffix '{template}'"));
    }
    if !harmony && template.contains(VOWEL_PLACEHOLDER) {
        return Err(format!(
            "suffix '{template}' uses {VOWEL_PLACEHOLDER} but harmony is disabled"
        ));
    }
    Ok(())
}
