//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tuslash_core::{ConjugatedRow, OUTPUT_HEADER};

/// Markdown formatter - outputs verbs as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    verb_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verb_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| {} |", OUTPUT_HEADER.join(" | "))?;
        writeln!(self.writer, "|{}", "---|".repeat(OUTPUT_HEADER.len()))?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_row(&mut self, row: &ConjugatedRow) -> Result<()> {
        if self.verb_count == 0 {
            self.write_header()?;
        }
        self.verb_count += 1;
        writeln!(self.writer, "| {} |", row.to_record().join(" | "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.verb_count == 0 {
            self.write_header()?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total verbs: {}*", self.verb_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
