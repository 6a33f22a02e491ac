//! Formal and dialectal Uzbek verb conjugation
//!
//! This crate turns a verb root into its six person/number forms in two
//! registers: the standard literary language (*rasmiy*) and the Qo'rg'oncha
//! colloquial variety spoken around Quyichirchiq (*sheva*).
//!
//! # Architecture
//!
//! Conjugation is driven entirely by data:
//! - **StemClassifier**: assigns a stem class from the root ending and
//!   derives the plain and extended stems
//! - **HarmonyResolver**: picks the harmonic vowel `e`/`a` for
//!   consonant-final dialectal roots
//! - **SuffixTable**: six suffix rules per (register, stem class), with
//!   whole-root and ending overrides for the 3rd person plural
//! - **ConjugationEngine**: composes the above; pure and stateless
//! - **BatchConjugator**: conjugates rows of root pairs, in parallel when
//!   the `parallel` feature is enabled
//!
//! The built-in rules can be replaced by a TOML rules file, see
//! [`rules::RuleSet::from_file`].
//!
//! # Example
//!
//! ```rust
//! use tuslash_core::{ConjugationEngine, Register};
//!
//! let engine = ConjugationEngine::new();
//!
//! let formal = engine.conjugate("bil", Register::Formal).unwrap();
//! assert_eq!(formal.forms()[0], "bilaman");
//!
//! let dialectal = engine.conjugate("bil", Register::Dialectal).unwrap();
//! assert_eq!(dialectal.forms()[5], "bilishedi");
//! ```

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod types;

pub use engine::{Analysis, ConjugationEngine};
pub use error::{ConjugationError, Result};
pub use pipeline::{
    BatchConjugator, BatchOutcome, ConjugatedRow, InvalidRowPolicy, RawRow, RejectedRow, RootPair,
    OUTPUT_HEADER, RECORD_WIDTH,
};
pub use rules::{RuleSet, RulesConfig};
pub use types::{
    normalize_root, validate_root, ConjugationSet, HarmonicVowel, Register, Slot, StemClass,
    StemForms, StemVariant,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_slot_titles() {
        for (i, slot) in Slot::ALL.iter().enumerate() {
            assert_eq!(OUTPUT_HEADER[2 + i], slot.title());
            assert_eq!(OUTPUT_HEADER[8 + i], format!("Sheva {}", slot.title()));
        }
    }
}
