//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tuslash_core::{Register, RuleSet, StemClass};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rules file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rules file: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                println!(
                    "  Front codas: {}",
                    rules.harmony().front_codas().join(", ")
                );
                for register in Register::ALL {
                    let harmony = [
                        StemClass::VowelFinal,
                        StemClass::LiquidFinal,
                        StemClass::OtherConsonant,
                    ]
                    .into_iter()
                    .any(|class| rules.suffixes().pattern(register, class).needs_harmony());
                    println!(
                        "  {}: vowel harmony {}",
                        register.native_name(),
                        if harmony { "on" } else { "off" }
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tuslash_core::RulesConfig;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules: PathBuf::from("qorgoncha.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("qorgoncha.toml"));
    }

    #[test]
    fn test_validate_valid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "{}",
            toml::to_string(&RulesConfig::default()).unwrap()
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
[metadata]
code = ""
name = "Test"
"#
        )
        .unwrap();

        let args = ValidateArgs {
            rules: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            rules: PathBuf::from("/nonexistent/rules.toml"),
        };
        assert!(args.execute().is_err());
    }
}
