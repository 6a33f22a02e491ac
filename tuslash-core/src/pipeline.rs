//! Batch conjugation of root pairs
//!
//! The batch layer sits between a tabular data source and the engine: it
//! filters incomplete rows, conjugates the rest (optionally in parallel) and
//! applies the invalid-row policy. Output order always equals input order.

use std::sync::Arc;

use serde::Serialize;

use crate::engine::ConjugationEngine;
use crate::error::{row_location, ConjugationError, Result};
use crate::types::{normalize_root, ConjugationSet};

/// Number of fields in an output record
pub const RECORD_WIDTH: usize = 14;

/// Output column titles, in record order
pub const OUTPUT_HEADER: [&str; RECORD_WIDTH] = [
    "Rasmiy o'zak",
    "Sheva o'zak",
    "1-sh birlik",
    "2-sh birlik",
    "3-sh birlik",
    "1-sh ko'plik",
    "2-sh ko'plik",
    "3-sh ko'plik",
    "Sheva 1-sh birlik",
    "Sheva 2-sh birlik",
    "Sheva 3-sh birlik",
    "Sheva 1-sh ko'plik",
    "Sheva 2-sh ko'plik",
    "Sheva 3-sh ko'plik",
];

/// A formal root and its dialectal counterpart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPair {
    pub formal: String,
    pub dialectal: String,
}

impl RootPair {
    pub fn new(formal: impl Into<String>, dialectal: impl Into<String>) -> Self {
        Self {
            formal: formal.into(),
            dialectal: dialectal.into(),
        }
    }
}

/// A row as read from the source table; either field may be absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Name of the source table, shared by all of its rows
    pub table: Option<Arc<str>>,
    /// 1-based line in the source table
    pub line: u64,
    pub formal: Option<String>,
    pub dialectal: Option<String>,
}

impl RawRow {
    pub fn new(line: u64, formal: Option<String>, dialectal: Option<String>) -> Self {
        Self {
            table: None,
            line,
            formal,
            dialectal,
        }
    }

    /// Attach the name of the table the row was read from
    pub fn in_table(mut self, table: Arc<str>) -> Self {
        self.table = Some(table);
        self
    }

    /// Pair of roots when both cells hold text
    pub fn pair(&self) -> Option<RootPair> {
        let present = |cell: &Option<String>| {
            cell.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| normalize_root(s).into_owned())
        };
        Some(RootPair {
            formal: present(&self.formal)?,
            dialectal: present(&self.dialectal)?,
        })
    }
}

/// Conjugations of one accepted row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugatedRow {
    pub formal_root: String,
    pub dialectal_root: String,
    pub formal: ConjugationSet,
    pub dialectal: ConjugationSet,
}

impl ConjugatedRow {
    /// Flatten into the 14-field output record
    pub fn to_record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(RECORD_WIDTH);
        record.push(self.formal_root.clone());
        record.push(self.dialectal_root.clone());
        record.extend(self.formal.forms().iter().cloned());
        record.extend(self.dialectal.forms().iter().cloned());
        record
    }
}

/// What to do with a row whose root the engine refuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Record the rejection and continue
    #[default]
    Skip,
    /// Stop at the first rejection
    Abort,
}

/// A row the engine refused under the skip policy
#[derive(Debug)]
pub struct RejectedRow {
    pub table: Option<String>,
    pub line: u64,
    pub error: ConjugationError,
}

impl RejectedRow {
    /// `row N`, prefixed with the table name when known
    pub fn location(&self) -> String {
        row_location(&self.table, &self.line)
    }
}

/// Result of a batch run
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<ConjugatedRow>,
    /// Rows dropped because a root was absent
    pub skipped: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Conjugates batches of raw rows
#[derive(Debug, Clone, Default)]
pub struct BatchConjugator {
    engine: ConjugationEngine,
    policy: InvalidRowPolicy,
    parallel: bool,
}

impl BatchConjugator {
    /// Create a batch conjugator around an engine
    pub fn new(engine: ConjugationEngine) -> Self {
        Self {
            engine,
            policy: InvalidRowPolicy::default(),
            parallel: false,
        }
    }

    /// Set the invalid-row policy
    pub fn policy(mut self, policy: InvalidRowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Conjugate rows on the rayon pool
    ///
    /// Ignored when the crate is built without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Conjugate a batch
    pub fn run(&self, rows: &[RawRow]) -> Result<BatchOutcome> {
        self.run_with_progress(rows, || {})
    }

    /// Conjugate a batch, calling `tick` once per input row
    pub fn run_with_progress<F>(&self, rows: &[RawRow], tick: F) -> Result<BatchOutcome>
    where
        F: Fn() + Sync,
    {
        let results = self.conjugate_all(rows, &tick);

        let mut outcome = BatchOutcome::default();
        for (raw, result) in rows.iter().zip(results) {
            match result {
                None => outcome.skipped += 1,
                Some(Ok(row)) => outcome.rows.push(row),
                Some(Err(error)) => {
                    let table = raw.table.as_deref().map(str::to_string);
                    match self.policy {
                        InvalidRowPolicy::Skip => outcome.rejected.push(RejectedRow {
                            table,
                            line: raw.line,
                            error,
                        }),
                        InvalidRowPolicy::Abort => {
                            return Err(ConjugationError::RowRejected {
                                table,
                                line: raw.line,
                                source: Box::new(error),
                            })
                        }
                    }
                }
            }
        }

        Ok(outcome)
    }

    fn conjugate_one(&self, row: &RawRow) -> Option<Result<ConjugatedRow>> {
        row.pair().map(|pair| self.engine.conjugate_pair(&pair))
    }

    #[cfg(feature = "parallel")]
    fn conjugate_all<F>(
        &self,
        rows: &[RawRow],
        tick: &F,
    ) -> Vec<Option<Result<ConjugatedRow>>>
    where
        F: Fn() + Sync,
    {
        use rayon::prelude::*;

        if self.parallel {
            rows.par_iter()
                .map(|row| {
                    let result = self.conjugate_one(row);
                    tick();
                    result
                })
                .collect()
        } else {
            self.conjugate_sequential(rows, tick)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn conjugate_all<F>(
        &self,
        rows: &[RawRow],
        tick: &F,
    ) -> Vec<Option<Result<ConjugatedRow>>>
    where
        F: Fn() + Sync,
    {
        self.conjugate_sequential(rows, tick)
    }

    fn conjugate_sequential<F>(
        &self,
        rows: &[RawRow],
        tick: &F,
    ) -> Vec<Option<Result<ConjugatedRow>>>
    where
        F: Fn() + Sync,
    {
        rows.iter()
            .map(|row| {
                let result = self.conjugate_one(row);
                tick();
                result
            })
            .collect()
    }
}
