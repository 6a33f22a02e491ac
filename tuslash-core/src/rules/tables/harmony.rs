//! Vowel harmony for consonant-final dialectal roots

use crate::types::HarmonicVowel;

/// Harmonic vowel lookup by coda
#[derive(Debug, Clone)]
pub struct HarmonyResolver {
    /// Codas selecting `e`; anything else selects `a`
    front_codas: Vec<String>,
}

impl HarmonyResolver {
    /// Create from the list of front codas
    pub fn new(front_codas: Vec<String>) -> Self {
        Self { front_codas }
    }

    /// Resolve the harmonic vowel by raw string suffix
    #[inline]
    pub fn resolve(&self, root: &str) -> HarmonicVowel {
        if self
            .front_codas
            .iter()
            .any(|coda| root.ends_with(coda.as_str()))
        {
            HarmonicVowel::E
        } else {
            HarmonicVowel::A
        }
    }

    /// Configured front codas
    pub fn front_codas(&self) -> &[String] {
        &self.front_codas
    }
}
