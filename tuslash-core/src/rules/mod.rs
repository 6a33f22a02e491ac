//! Conjugation rules
//!
//! Rules are data: a TOML schema (`config`), the runtime tables built from
//! it (`tables`), the `RuleSet` bundling them and the loader for rules files.

pub mod config;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::RulesConfig;
pub use runtime::RuleSet;
pub use tables::{HarmonyResolver, StemClassifier, SuffixPattern, SuffixRule, SuffixTable};
