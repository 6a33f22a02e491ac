//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use tuslash_core::Register;

pub mod conjugate;
pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Conjugate every root pair of one or more tables
    Process(process::ProcessArgs),

    /// Conjugate a single root
    Conjugate(conjugate::ConjugateArgs),

    /// Validate an external rules file
    Validate(validate::ValidateArgs),

    /// Generate a rules file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported registers
    Registers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Conjugate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Registers => {
                out.push_str("Supported registers:\n");
                for register in Register::ALL {
                    out.push_str(&format!(
                        "  {:<10} {}\n",
                        register.as_str(),
                        register.native_name()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for format in process::OutputFormat::value_variants() {
                    let help = format
                        .to_possible_value()
                        .and_then(|v| v.get_help().map(|h| h.to_string()))
                        .unwrap_or_default();
                    out.push_str(&format!("  {:<10} {}\n", format.as_str(), help));
                }
            }
        }
        out
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second command in the same process keeps the first logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
