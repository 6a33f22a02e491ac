//! Root table reading
//!
//! Reads a delimited table with a header row and extracts the formal and
//! dialectal root columns. Blank cells are reported as absent.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tuslash_core::RawRow;

use crate::error::CliError;

/// Column layout of an input table
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Header of the formal root column
    pub formal_column: String,
    /// Header of the dialectal root column
    pub dialectal_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            formal_column: "rasmiy".to_string(),
            dialectal_column: "sheva".to_string(),
            delimiter: b',',
        }
    }
}

/// Reader for root pair tables
pub struct TableReader {
    schema: TableSchema,
}

impl TableReader {
    /// Create a reader for a schema
    pub fn new(schema: TableSchema) -> Self {
        Self { schema }
    }

    /// Read all rows of a table
    pub fn read(&self, path: &Path) -> Result<Vec<RawRow>> {
        if !path.is_file() {
            return Err(CliError::SourceNotFound(path.display().to_string()).into());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.schema.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open table: {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header of: {}", path.display()))?
            .clone();

        let position = |name: &str| headers.iter().position(|h| h == name);
        let formal_idx = position(&self.schema.formal_column);
        let dialectal_idx = position(&self.schema.dialectal_column);

        let (formal_idx, dialectal_idx) = match (formal_idx, dialectal_idx) {
            (Some(f), Some(d)) => (f, d),
            _ => {
                let columns = [
                    (formal_idx, &self.schema.formal_column),
                    (dialectal_idx, &self.schema.dialectal_column),
                ]
                .into_iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| name.clone())
                .collect();

                return Err(CliError::MissingColumns {
                    path: path.display().to_string(),
                    columns,
                }
                .into());
            }
        };

        let table: Arc<str> = Arc::from(path.display().to_string());
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result
                .with_context(|| format!("Failed to read record in: {}", path.display()))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let cell = |idx: usize| {
                record
                    .get(idx)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };

            rows.push(
                RawRow::new(line, cell(formal_idx), cell(dialectal_idx)).in_table(table.clone()),
            );
        }

        log::debug!("Read {} rows from {}", rows.len(), path.display());
        Ok(rows)
    }
}
