//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tuslash_core::{ConjugatedRow, ConjugationSet, Slot};

/// JSON formatter - outputs verbs as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    verbs: Vec<VerbData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct VerbData {
    /// Formal root
    pub formal_root: String,
    /// Dialectal root
    pub dialectal_root: String,
    /// Formal forms keyed by slot code
    pub formal: SlotForms,
    /// Dialectal forms keyed by slot code
    pub dialectal: SlotForms,
}

/// Six forms serialized in slot order
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotForms {
    #[serde(rename = "1sg")]
    pub first_singular: String,
    #[serde(rename = "2sg")]
    pub second_singular: String,
    #[serde(rename = "3sg")]
    pub third_singular: String,
    #[serde(rename = "1pl")]
    pub first_plural: String,
    #[serde(rename = "2pl")]
    pub second_plural: String,
    #[serde(rename = "3pl")]
    pub third_plural: String,
}

impl From<&ConjugationSet> for SlotForms {
    fn from(set: &ConjugationSet) -> Self {
        let form = |slot: Slot| set.get(slot).to_string();
        Self {
            first_singular: form(Slot::FirstSingular),
            second_singular: form(Slot::SecondSingular),
            third_singular: form(Slot::ThirdSingular),
            first_plural: form(Slot::FirstPlural),
            second_plural: form(Slot::SecondPlural),
            third_plural: form(Slot::ThirdPlural),
        }
    }
}

impl From<&ConjugatedRow> for VerbData {
    fn from(row: &ConjugatedRow) -> Self {
        Self {
            formal_root: row.formal_root.clone(),
            dialectal_root: row.dialectal_root.clone(),
            formal: SlotForms::from(&row.formal),
            dialectal: SlotForms::from(&row.dialectal),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            verbs: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_row(&mut self, row: &ConjugatedRow) -> Result<()> {
        self.verbs.push(VerbData::from(row));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.verbs)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.verbs)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
