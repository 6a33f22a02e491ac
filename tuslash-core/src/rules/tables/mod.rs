//! Runtime lookup tables built from a rules configuration

pub mod classifier;
pub mod harmony;
pub mod suffix;

pub use classifier::StemClassifier;
pub use harmony::HarmonyResolver;
pub use suffix::{SuffixPattern, SuffixRule, SuffixTable};
