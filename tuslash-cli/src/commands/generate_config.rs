//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tuslash_core::RulesConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code for the new rule set
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE_HEADER: &str = r#"# Conjugation rules
#
# Starts as a copy of the built-in Qo'rg'oncha rules.
#
# [stems]       root endings per class, linking sounds, whole-root exceptions
# [harmony]     codas that select the front vowel "e" (otherwise "a")
# [formal]      standard register patterns
# [dialectal]   dialect register patterns
#
# Each register has vowel_final and consonant_final patterns and an optional
# liquid_final pattern (falls back to consonant_final). A pattern lists the
# five person suffixes (1sg, 2sg, 3sg, 1pl, 2pl) and a default third_plural.
# third_plural_by_ending (longest ending wins) and third_plural_exceptions
# (whole root) override the default. Every suffix names the stem it attaches
# to: "plain" (root) or "extended" (root plus linking sound). Suffixes of a
# pattern with harmony = true may use {v} for the harmonic vowel.
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating rules template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the rules file");
        println!("2. Validate your rules:");
        println!("   tuslash validate --rules {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   tuslash process -i fellar.csv --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Render the built-in rules under the requested code
    fn generate_template(&self) -> Result<String> {
        let mut config = RulesConfig::default();
        config.metadata.code = self.code.clone();
        config.metadata.name = format!("{} (based on {})", self.code, config.metadata.name);

        let body = toml::to_string_pretty(&config).context("Failed to serialize rules")?;
        Ok(format!("{TEMPLATE_HEADER}\n{body}"))
    }
}
