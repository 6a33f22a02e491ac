//! Stem classification by root ending
//!
//! Whole-root exceptions are consulted first, then the vowel and liquid
//! ending sets. Everything else is `OtherConsonant`.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{normalize_root, validate_root, StemClass, StemForms};

#[derive(Debug, Clone)]
struct Exception {
    extended: String,
    class: Option<StemClass>,
}

/// Stem classifier built from a rules configuration
#[derive(Debug, Clone)]
pub struct StemClassifier {
    vowel_endings: Vec<String>,
    liquid_endings: Vec<String>,
    vowel_link: String,
    consonant_link: String,
    exceptions: HashMap<String, Exception>,
}

impl StemClassifier {
    /// Create from ending sets and linking sounds
    pub fn new(
        vowel_endings: Vec<String>,
        liquid_endings: Vec<String>,
        vowel_link: String,
        consonant_link: String,
    ) -> Self {
        Self {
            vowel_endings,
            liquid_endings,
            vowel_link,
            consonant_link,
            exceptions: HashMap::new(),
        }
    }

    /// Register a whole-root override of the extended stem (and optionally the class)
    pub fn with_exception(
        mut self,
        root: impl Into<String>,
        extended: impl Into<String>,
        class: Option<StemClass>,
    ) -> Self {
        self.exceptions.insert(
            root.into(),
            Exception {
                extended: extended.into(),
                class,
            },
        );
        self
    }

    /// Class of a root by its trailing characters, ignoring exceptions
    pub fn class_of(&self, root: &str) -> StemClass {
        if self.vowel_endings.iter().any(|e| root.ends_with(e.as_str())) {
            StemClass::VowelFinal
        } else if self.liquid_endings.iter().any(|e| root.ends_with(e.as_str())) {
            StemClass::LiquidFinal
        } else {
            StemClass::OtherConsonant
        }
    }

    /// Classify a root and derive its plain and extended stems
    pub fn classify(&self, root: &str) -> Result<StemForms> {
        let root = normalize_root(root);
        let root = validate_root(&root)?;

        if let Some(exception) = self.exceptions.get(root) {
            return Ok(StemForms {
                class: exception.class.unwrap_or_else(|| self.class_of(root)),
                plain: root.to_string(),
                extended: exception.extended.clone(),
            });
        }

        let class = self.class_of(root);
        let link = match class {
            StemClass::VowelFinal => &self.vowel_link,
            StemClass::LiquidFinal | StemClass::OtherConsonant => &self.consonant_link,
        };

        Ok(StemForms {
            class,
            plain: root.to_string(),
            extended: format!("{root}{link}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> StemClassifier {
        StemClassifier::new(
            vec!["a".into(), "e".into(), "i".into()],
            vec!["r".into(), "l".into()],
            "y".into(),
            "a".into(),
        )
        .with_exception("ye", "yey", None)
    }

    #[test]
    fn test_vowel_final() {
        let stems = classifier().classify("o'qi").unwrap();
        assert_eq!(stems.class, StemClass::VowelFinal);
        assert_eq!(stems.plain, "o'qi");
        assert_eq!(stems.extended, "o'qiy");
    }

    #[test]
    fn test_liquid_final() {
        let stems = classifier().classify("bor").unwrap();
        assert_eq!(stems.class, StemClass::LiquidFinal);
        assert_eq!(stems.extended, "bora");

        assert_eq!(classifier().class_of("bil"), StemClass::LiquidFinal);
    }

    #[test]
    fn test_other_consonant() {
        let stems = classifier().classify("yoz").unwrap();
        assert_eq!(stems.class, StemClass::OtherConsonant);
        assert_eq!(stems.plain, "yoz");
        assert_eq!(stems.extended, "yoza");
    }

    #[test]
    fn test_decomposed_root_is_composed() {
        let stems = classifier().classify("ko\u{308}r").unwrap();
        assert_eq!(stems.class, StemClass::LiquidFinal);
        assert_eq!(stems.plain, "kör");
        assert_eq!(stems.extended, "köra");
    }

    #[test]
    fn test_exception_checked_first() {
        let classifier = classifier().with_exception("ket", "keta", Some(StemClass::VowelFinal));
        let stems = classifier.classify("ket").unwrap();
        assert_eq!(stems.class, StemClass::VowelFinal);
        assert_eq!(stems.extended, "keta");

        let stems = classifier.classify("ye").unwrap();
        assert_eq!(stems.class, StemClass::VowelFinal);
        assert_eq!(stems.extended, "yey");
    }

    #[test]
    fn test_empty_root_rejected() {
        assert!(classifier().classify("").unwrap_err().is_invalid_input());
    }
}
