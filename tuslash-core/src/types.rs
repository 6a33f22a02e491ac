//! Core value types shared by the rule tables and the engine

use crate::error::{ConjugationError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Linguistic register a root is conjugated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    /// Standard literary conjugation (rasmiy)
    Formal,
    /// Qo'rg'oncha colloquial conjugation (sheva)
    Dialectal,
}

impl Register {
    /// Both registers, formal first
    pub const ALL: [Register; 2] = [Register::Formal, Register::Dialectal];

    /// English identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Register::Formal => "formal",
            Register::Dialectal => "dialectal",
        }
    }

    /// Uzbek name
    pub fn native_name(&self) -> &'static str {
        match self {
            Register::Formal => "rasmiy",
            Register::Dialectal => "sheva",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Register {
    type Err = ConjugationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "formal" | "rasmiy" => Ok(Register::Formal),
            "dialectal" | "dialect" | "sheva" => Ok(Register::Dialectal),
            other => Err(ConjugationError::Configuration(format!(
                "unknown register '{other}'"
            ))),
        }
    }
}

/// Person/number position of a conjugated form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// 1st person singular (men)
    #[serde(rename = "1sg")]
    FirstSingular,
    /// 2nd person singular (sen)
    #[serde(rename = "2sg")]
    SecondSingular,
    /// 3rd person singular (u)
    #[serde(rename = "3sg")]
    ThirdSingular,
    /// 1st person plural (biz)
    #[serde(rename = "1pl")]
    FirstPlural,
    /// 2nd person plural (sizlar)
    #[serde(rename = "2pl")]
    SecondPlural,
    /// 3rd person plural (ular)
    #[serde(rename = "3pl")]
    ThirdPlural,
}

impl Slot {
    /// All slots in output order
    pub const ALL: [Slot; 6] = [
        Slot::FirstSingular,
        Slot::SecondSingular,
        Slot::ThirdSingular,
        Slot::FirstPlural,
        Slot::SecondPlural,
        Slot::ThirdPlural,
    ];

    /// Position in a [`ConjugationSet`]
    pub fn index(&self) -> usize {
        match self {
            Slot::FirstSingular => 0,
            Slot::SecondSingular => 1,
            Slot::ThirdSingular => 2,
            Slot::FirstPlural => 3,
            Slot::SecondPlural => 4,
            Slot::ThirdPlural => 5,
        }
    }

    /// Short code such as `1sg`
    pub fn code(&self) -> &'static str {
        match self {
            Slot::FirstSingular => "1sg",
            Slot::SecondSingular => "2sg",
            Slot::ThirdSingular => "3sg",
            Slot::FirstPlural => "1pl",
            Slot::SecondPlural => "2pl",
            Slot::ThirdPlural => "3pl",
        }
    }

    /// Uzbek column title
    pub fn title(&self) -> &'static str {
        match self {
            Slot::FirstSingular => "1-sh birlik",
            Slot::SecondSingular => "2-sh birlik",
            Slot::ThirdSingular => "3-sh birlik",
            Slot::FirstPlural => "1-sh ko'plik",
            Slot::SecondPlural => "2-sh ko'plik",
            Slot::ThirdPlural => "3-sh ko'plik",
        }
    }

    /// Personal pronoun for the slot
    pub fn pronoun(&self) -> &'static str {
        match self {
            Slot::FirstSingular => "men",
            Slot::SecondSingular => "sen",
            Slot::ThirdSingular => "u",
            Slot::FirstPlural => "biz",
            Slot::SecondPlural => "sizlar",
            Slot::ThirdPlural => "ular",
        }
    }
}

/// Root category by final sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemClass {
    /// Ends in a, e or i
    VowelFinal,
    /// Ends in r or l
    LiquidFinal,
    /// Any other consonant ending
    OtherConsonant,
}

impl StemClass {
    /// snake_case identifier as used in rules files
    pub fn as_str(&self) -> &'static str {
        match self {
            StemClass::VowelFinal => "vowel_final",
            StemClass::LiquidFinal => "liquid_final",
            StemClass::OtherConsonant => "other_consonant",
        }
    }
}

impl fmt::Display for StemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which stem a suffix attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemVariant {
    /// Root unchanged (oddiy asos)
    Plain,
    /// Root plus linking sound (a-li asos)
    Extended,
}

/// Stem variants derived from a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemForms {
    /// Class the root was assigned to
    pub class: StemClass,
    /// Root unchanged
    pub plain: String,
    /// Root plus linking sound
    pub extended: String,
}

impl StemForms {
    /// Select a stem variant
    pub fn get(&self, variant: StemVariant) -> &str {
        match variant {
            StemVariant::Plain => &self.plain,
            StemVariant::Extended => &self.extended,
        }
    }
}

/// Harmonic vowel of consonant-final dialectal suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonicVowel {
    /// Front vowel `e`
    E,
    /// Back vowel `a`
    A,
}

impl HarmonicVowel {
    /// Vowel as it appears in a suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonicVowel::E => "e",
            HarmonicVowel::A => "a",
        }
    }
}

impl fmt::Display for HarmonicVowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Six conjugated forms of one root in one register
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationSet {
    register: Register,
    forms: [String; 6],
}

impl ConjugationSet {
    pub(crate) fn new(register: Register, forms: [String; 6]) -> Self {
        Self { register, forms }
    }

    /// Register the forms were built for
    pub fn register(&self) -> Register {
        self.register
    }

    /// Form in a given slot
    pub fn get(&self, slot: Slot) -> &str {
        &self.forms[slot.index()]
    }

    /// Forms in slot order
    pub fn forms(&self) -> &[String; 6] {
        &self.forms
    }

    /// (slot, form) pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    /// Number of forms, always 6
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Never true; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Take the forms out
    pub fn into_forms(self) -> [String; 6] {
        self.forms
    }
}

/// Apostrophe-like marks that occur inside Uzbek Latin words (o'qi, ko'r)
const WORD_APOSTROPHES: [char; 5] = ['\'', '\u{02BB}', '\u{02BC}', '\u{2018}', '\u{2019}'];

/// Compose a root to NFC so that `ko\u{308}r` and `kör` match the same rules
pub fn normalize_root(root: &str) -> Cow<'_, str> {
    if is_nfc(root) {
        Cow::Borrowed(root)
    } else {
        Cow::Owned(root.nfc().collect())
    }
}

/// Check that a root is non-empty and made of letters
pub fn validate_root(root: &str) -> Result<&str> {
    if root.is_empty() {
        return Err(ConjugationError::invalid_input(root, "root is empty"));
    }

    if let Some(ch) = root
        .chars()
        .find(|ch| !ch.is_alphabetic() && !WORD_APOSTROPHES.contains(ch))
    {
        return Err(ConjugationError::invalid_input(
            root,
            format!("unexpected character {ch:?}"),
        ));
    }

    if !root.chars().any(char::is_alphabetic) {
        return Err(ConjugationError::invalid_input(root, "root has no letters"));
    }

    Ok(root)
}
