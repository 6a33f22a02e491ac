//! Error types for the conjugation engine

use thiserror::Error;

/// Errors raised by the rule engine and the rule-file loader
#[derive(Error, Debug)]
pub enum ConjugationError {
    /// Root is empty or contains characters that cannot belong to a verb stem
    #[error("invalid input '{root}': {reason}")]
    InvalidInput {
        /// The offending root, as supplied
        root: String,
        /// Why the root was refused
        reason: String,
    },

    /// Rule set failed validation
    #[error("invalid rules configuration: {0}")]
    Configuration(String),

    /// Rules file could not be read or parsed
    #[error("configuration error in {path}: {error}")]
    ConfigurationFile {
        /// The rules file path
        path: String,
        /// The specific error that occurred
        error: String,
    },

    /// A batch row failed under the abort policy
    #[error("{}: {source}", row_location(.table, .line))]
    RowRejected {
        /// Source table of the row, when known
        table: Option<String>,
        /// 1-based line of the row in its source table
        line: u64,
        /// Error returned by the engine for this row
        #[source]
        source: Box<ConjugationError>,
    },
}

impl ConjugationError {
    pub(crate) fn invalid_input(root: &str, reason: impl Into<String>) -> Self {
        ConjugationError::InvalidInput {
            root: root.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error (or the row error it wraps) is an input rejection
    pub fn is_invalid_input(&self) -> bool {
        match self {
            ConjugationError::InvalidInput { .. } => true,
            ConjugationError::RowRejected { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

/// `row N`, prefixed with the table name when there is one
pub(crate) fn row_location(table: &Option<String>, line: &u64) -> String {
    match table {
        Some(table) => format!("{table} row {line}"),
        None => format!("row {line}"),
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ConjugationError>;
