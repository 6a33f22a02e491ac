//! CSV (delimited table) output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tuslash_core::{ConjugatedRow, OUTPUT_HEADER};

/// CSV formatter - header row followed by one 14-field record per verb
pub struct CsvFormatter<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W) -> Self {
        Self::with_delimiter(writer, b',')
    }

    /// Create a CSV formatter with a custom field delimiter
    pub fn with_delimiter(writer: W, delimiter: u8) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(writer),
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer.write_record(OUTPUT_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for CsvFormatter<W> {
    fn format_row(&mut self, row: &ConjugatedRow) -> Result<()> {
        self.write_header()?;
        self.writer.write_record(row.to_record())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        // An empty batch still gets its header
        self.write_header()?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuslash_core::{ConjugationEngine, RootPair};

    #[test]
    fn test_header_and_rows() {
        let row = ConjugationEngine::new()
            .conjugate_pair(&RootPair::new("bil", "bil"))
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = CsvFormatter::new(&mut buffer);
            formatter.format_row(&row).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Rasmiy o'zak,Sheva o'zak,1-sh birlik"));
        assert_eq!(
            lines[1],
            "bil,bil,bilaman,bilasan,biladi,bilamiz,bilasizlar,bilishadi,\
             bilem,bilesn,biledi,bilemz,bilesler,bilishedi"
        );
    }

    #[test]
    fn test_empty_batch_writes_header_only() {
        let mut buffer = Vec::new();
        {
            let mut formatter = CsvFormatter::with_delimiter(&mut buffer, b';');
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("Rasmiy o'zak;Sheva o'zak"));
    }
}
