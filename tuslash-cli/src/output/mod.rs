//! Output formatting module

use anyhow::Result;
use tuslash_core::ConjugatedRow;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single conjugated row
    fn format_row(&mut self, row: &ConjugatedRow) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod delimited;
pub mod json;
pub mod markdown;

pub use delimited::CsvFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
