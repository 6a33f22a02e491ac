//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input table not found or inaccessible
    SourceNotFound(String),
    /// Input table lacks required columns
    MissingColumns {
        /// Table the columns were looked up in
        path: String,
        /// Required column names that are absent
        columns: Vec<String>,
    },
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::SourceNotFound(path) => write!(f, "Source not found: {path}"),
            CliError::MissingColumns { path, columns } => write!(
                f,
                "Required columns missing in {path}: {}",
                columns.join(", ")
            ),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let error = CliError::SourceNotFound("fellar.csv".to_string());
        assert_eq!(error.to_string(), "Source not found: fellar.csv");
    }

    #[test]
    fn test_missing_columns_display() {
        let error = CliError::MissingColumns {
            path: "fellar.csv".to_string(),
            columns: vec!["rasmiy".to_string(), "sheva".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Required columns missing in fellar.csv: rasmiy, sheva"
        );
    }

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_and_processing_display() {
        let config_error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(config_error.to_string(), "Configuration error: invalid format");

        let processing_error = CliError::ProcessingError("row 3: invalid input".to_string());
        assert!(processing_error
            .to_string()
            .starts_with("Processing error:"));
    }

    #[test]
    fn test_error_downcasts_through_anyhow() {
        let result: CliResult<()> = Err(CliError::SourceNotFound("x.csv".to_string()).into());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::SourceNotFound(_))
        ));
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::SourceNotFound("fe'llar/o'zaklar ro'yxati.csv".to_string());
        assert_eq!(
            error.to_string(),
            "Source not found: fe'llar/o'zaklar ro'yxati.csv"
        );
    }
}
