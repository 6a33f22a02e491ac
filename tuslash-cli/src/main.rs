//! Tuslash command-line entry point

use clap::Parser;
use tuslash_cli::commands::Commands;

/// Formal and dialectal Uzbek verb conjugation
#[derive(Debug, Parser)]
#[command(name = "tuslash", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_arguments() {
        let cli = Cli::try_parse_from([
            "tuslash", "process", "-i", "fellar.csv", "-f", "json", "--strict",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["fellar.csv".to_string()]);
                assert!(args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
