//! Single-root conjugation command

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use std::path::PathBuf;
use tuslash_core::{ConjugationEngine, Register, Slot};

use crate::error::CliError;
use crate::rules_source::RulesSource;

/// Arguments for the conjugate command
#[derive(Debug, Args)]
pub struct ConjugateArgs {
    /// Verb root to conjugate
    #[arg(value_name = "ROOT")]
    pub root: String,

    /// Register(s) to conjugate in
    #[arg(short, long, value_enum, default_value = "both")]
    pub register: RegisterChoice,

    /// External conjugation rules file (TOML)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Show stem class, stems and harmonic vowel
    #[arg(short, long)]
    pub explain: bool,
}

/// Register selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegisterChoice {
    /// Formal register only
    Formal,
    /// Dialectal register only
    Dialectal,
    /// Both registers
    Both,
}

impl RegisterChoice {
    fn registers(&self) -> &'static [Register] {
        match self {
            RegisterChoice::Formal => &[Register::Formal],
            RegisterChoice::Dialectal => &[Register::Dialectal],
            RegisterChoice::Both => &Register::ALL,
        }
    }
}

impl ConjugateArgs {
    /// Execute the conjugate command
    pub fn execute(&self) -> Result<()> {
        let rules = RulesSource::from_option(self.rules.clone()).load()?;
        let engine = ConjugationEngine::with_rules(rules);
        print!("{}", self.render(&engine)?);
        Ok(())
    }

    /// Build the printed table
    pub fn render(&self, engine: &ConjugationEngine) -> Result<String> {
        let mut out = String::new();

        if self.explain {
            let rules = engine.rules();
            writeln!(out, "rules: {} ({})", rules.name(), rules.code())?;
        }

        for register in self.registers() {
            let set = engine
                .conjugate(&self.root, *register)
                .map_err(|e| CliError::ProcessingError(e.to_string()))?;

            writeln!(out, "{} ({})", register.native_name(), register)?;

            if self.explain {
                let analysis = engine
                    .analyze(&self.root, *register)
                    .map_err(|e| CliError::ProcessingError(e.to_string()))?;
                writeln!(out, "  class: {}", analysis.stems.class)?;
                writeln!(out, "  plain stem: {}", analysis.stems.plain)?;
                writeln!(out, "  extended stem: {}", analysis.stems.extended)?;
                if let Some(vowel) = analysis.harmonic_vowel {
                    writeln!(out, "  harmonic vowel: {}", vowel.as_str())?;
                }
            }

            for slot in Slot::ALL {
                writeln!(
                    out,
                    "  {}\t{:<7}\t{}",
                    slot.code(),
                    slot.pronoun(),
                    set.get(slot)
                )?;
            }
        }

        Ok(out)
    }

    fn registers(&self) -> &'static [Register] {
        self.register.registers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(root: &str, register: RegisterChoice, explain: bool) -> ConjugateArgs {
        ConjugateArgs {
            root: root.to_string(),
            register,
            rules: None,
            explain,
        }
    }

    #[test]
    fn test_render_both_registers() {
        let output = args("bil", RegisterChoice::Both, false)
            .render(&ConjugationEngine::new())
            .unwrap();

        assert!(output.contains("rasmiy (formal)"));
        assert!(output.contains("sheva (dialectal)"));
        assert!(output.contains("bilaman"));
        assert!(output.contains("bilishedi"));
    }

    #[test]
    fn test_render_single_register_with_explanation() {
        let output = args("o'qi", RegisterChoice::Dialectal, true)
            .render(&ConjugationEngine::new())
            .unwrap();

        assert!(output.starts_with("rules: Qo'rg'oncha (Quyichirchiq) sheva (uz-qorgoncha)"));
        assert!(!output.contains("rasmiy"));
        assert!(output.contains("class: vowel_final"));
        assert!(output.contains("extended stem: o'qiy"));
        assert!(!output.contains("harmonic vowel"));
        assert!(output.contains("o'qiym"));
    }

    #[test]
    fn test_render_harmonic_vowel() {
        let output = args("kel", RegisterChoice::Dialectal, true)
            .render(&ConjugationEngine::new())
            .unwrap();
        assert!(output.contains("harmonic vowel: e"));
    }

    #[test]
    fn test_render_invalid_root() {
        let err = args("b1l", RegisterChoice::Formal, false)
            .render(&ConjugationEngine::new())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ProcessingError(_))
        ));
    }
}
