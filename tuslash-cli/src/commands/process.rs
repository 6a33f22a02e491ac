//! Process command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tuslash_core::{BatchConjugator, BatchOutcome, ConjugationEngine, InvalidRowPolicy, RawRow};

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, TableReader, TableSchema};
use crate::output::{CsvFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter};
use crate::progress::ProgressReporter;
use crate::rules_source::RulesSource;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input tables or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: csv]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// External conjugation rules file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Column holding formal roots [default: rasmiy]
    #[arg(long, value_name = "NAME")]
    pub formal_column: Option<String>,

    /// Column holding dialectal roots [default: sheva]
    #[arg(long, value_name = "NAME")]
    pub dialectal_column: Option<String>,

    /// Field delimiter of input and CSV output [default: ,]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Abort on the first invalid root instead of skipping the row
    #[arg(long)]
    pub strict: bool,

    /// Force parallel processing even for small tables
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (0 = all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// CSV table with the 14-column header
    Csv,
    /// JSON array of verbs with forms keyed by slot
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Settings after merging arguments over the configuration file
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    schema: TableSchema,
    policy: InvalidRowPolicy,
    rules: RulesSource,
    threads: Option<usize>,
    parallel_threshold: usize,
    pretty_json: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting conjugation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.settings(&config)?;
        log::debug!("Settings: {:?}", settings);

        configure_threads(settings.threads);

        log::info!("Rules: {}", settings.rules.display_name());
        let rules = settings.rules.load()?;

        let files = resolve_patterns(&self.input)?;
        let reader = TableReader::new(settings.schema.clone());
        let mut rows = Vec::new();
        for file in &files {
            log::info!("Reading {}", file.display());
            rows.extend(reader.read(file)?);
        }
        log::info!("Read {} rows from {} file(s)", rows.len(), files.len());

        let parallel = self.parallel || rows.len() >= settings.parallel_threshold;
        let conjugator = BatchConjugator::new(ConjugationEngine::with_rules(rules))
            .policy(settings.policy)
            .parallel(parallel);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_rows(rows.len() as u64);
        let outcome = conjugate_rows(&conjugator, &rows, &progress)?;

        for rejected in &outcome.rejected {
            log::warn!("Skipping {}: {}", rejected.location(), rejected.error);
        }

        let mut formatter = self.create_formatter(&settings)?;
        for row in &outcome.rows {
            formatter.format_row(row)?;
        }
        formatter.finish()?;

        if !self.quiet {
            self.print_summary(&outcome);
        }

        Ok(())
    }

    /// Merge arguments over configuration values
    fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true).map_err(|e| {
                CliError::ConfigError(format!(
                    "unknown output format '{}': {e}",
                    config.output.default_format
                ))
            })?,
        };

        let delimiter = self.delimiter.unwrap_or(config.processing.delimiter);
        if !delimiter.is_ascii() {
            return Err(
                CliError::ConfigError(format!("delimiter {delimiter:?} must be ASCII")).into(),
            );
        }

        let schema = TableSchema {
            formal_column: self
                .formal_column
                .clone()
                .unwrap_or_else(|| config.processing.formal_column.clone()),
            dialectal_column: self
                .dialectal_column
                .clone()
                .unwrap_or_else(|| config.processing.dialectal_column.clone()),
            delimiter: delimiter as u8,
        };

        let policy = if self.strict || config.processing.strict {
            InvalidRowPolicy::Abort
        } else {
            InvalidRowPolicy::Skip
        };

        let threads = self
            .threads
            .or(Some(config.performance.worker_threads))
            .filter(|n| *n > 0);

        Ok(Settings {
            format,
            schema,
            policy,
            rules: RulesSource::from_option(
                self.rules
                    .clone()
                    .or_else(|| config.processing.rules_file.clone()),
            ),
            threads,
            parallel_threshold: config.performance.parallel_threshold_rows,
            pretty_json: config.output.pretty_json,
        })
    }

    /// Open the output destination
    fn create_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn create_formatter(&self, settings: &Settings) -> Result<Box<dyn OutputFormatter>> {
        let writer = self.create_writer()?;
        Ok(match settings.format {
            OutputFormat::Csv => Box::new(CsvFormatter::with_delimiter(
                writer,
                settings.schema.delimiter,
            )),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    fn print_summary(&self, outcome: &BatchOutcome) {
        eprintln!("✓ Conjugated {} verbs", outcome.rows.len());
        if outcome.skipped > 0 {
            eprintln!("  Skipped {} incomplete rows", outcome.skipped);
        }
        if !outcome.rejected.is_empty() {
            eprintln!("  Rejected {} rows with invalid roots", outcome.rejected.len());
        }
        if let Some(path) = &self.output {
            eprintln!("  Output written to {}", path.display());
        }
    }
}

/// Run the batch, settling the progress bar whether or not it succeeds
fn conjugate_rows(
    conjugator: &BatchConjugator,
    rows: &[RawRow],
    progress: &ProgressReporter,
) -> Result<BatchOutcome> {
    match conjugator.run_with_progress(rows, || progress.row_completed()) {
        Ok(outcome) => {
            progress.finish();
            Ok(outcome)
        }
        Err(e) => {
            progress.abandon();
            Err(CliError::ProcessingError(e.to_string()).into())
        }
    }
}

/// Size the global rayon pool
fn configure_threads(threads: Option<usize>) {
    match threads {
        Some(count) => {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(count)
                .build_global()
            {
                log::warn!("Could not configure {count} worker threads: {e}");
            } else {
                log::debug!("Using {count} worker threads");
            }
        }
        None => log::debug!("Using all {} cores", num_cpus::get()),
    }
}
