//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Column holding formal roots
    pub formal_column: String,

    /// Column holding dialectal roots
    pub dialectal_column: String,

    /// Field delimiter of input tables
    pub delimiter: char,

    /// External rules file (built-in rules when absent)
    pub rules_file: Option<PathBuf>,

    /// Abort on the first invalid root instead of skipping the row
    pub strict: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            formal_column: "rasmiy".to_string(),
            dialectal_column: "sheva".to_string(),
            delimiter: ',',
            rules_file: None,
            strict: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "csv".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Row count from which batches run in parallel
    pub parallel_threshold_rows: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_threshold_rows: 10_000,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if config.processing.formal_column.trim().is_empty()
            || config.processing.dialectal_column.trim().is_empty()
        {
            return Err(CliError::ConfigError("column names must not be empty".to_string()).into());
        }

        Ok(config)
    }

    /// Load from a path when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.processing.formal_column, "rasmiy");
        assert_eq!(config.processing.dialectal_column, "sheva");
        assert_eq!(config.processing.delimiter, ',');
        assert_eq!(config.output.default_format, "csv");
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[processing]
formal_column = "formal"
delimiter = ";"
strict = true

[performance]
worker_threads = 2
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.processing.formal_column, "formal");
        assert_eq!(config.processing.dialectal_column, "sheva");
        assert_eq!(config.processing.delimiter, ';');
        assert!(config.processing.strict);
        assert_eq!(config.performance.worker_threads, 2);
        assert_eq!(config.performance.parallel_threshold_rows, 10_000);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_rejects_empty_column() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[processing]\ndialectal_column = \"\"\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("column names"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[processing\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
