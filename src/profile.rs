//! Concurrent per-column profiling.
//!
//! Classifies every column, fans one unit of work out per column onto a
//! bounded worker pool, and drains the tagged results through a single
//! aggregating consumer. Workers own their column data outright; results are
//! moved over a channel, so no accumulator is ever written concurrently.

use std::{
    sync::{mpsc, Arc, Mutex},
    thread,
};

use serde::Serialize;

use crate::{
    classify::{classify, ClassifiedColumn, MissingTokens},
    summary::{CategoricalSummary, NumericSummary},
    table::ColumnTable,
};

/// One column's summary, tagged by its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnSummary {
    /// Summary of a numeric column.
    Numeric(NumericSummary),
    /// Summary of a categorical column.
    Categorical(CategoricalSummary),
}

impl ColumnSummary {
    /// The summarized column's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Numeric(s) => &s.name,
            Self::Categorical(s) => &s.name,
        }
    }
}

/// Aggregated summaries for a whole table.
///
/// Both collections are sorted by column name, so output is deterministic
/// regardless of task completion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileReport {
    /// Numeric column summaries, sorted by column name.
    pub numeric: Vec<NumericSummary>,
    /// Categorical column summaries, sorted by column name.
    pub categorical: Vec<CategoricalSummary>,
    /// Zero-row columns, excluded from both summary sets.
    pub skipped: Vec<String>,
}

impl ProfileReport {
    /// Total number of summarized columns.
    pub fn column_count(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }
}

/// Profiles table columns on a bounded worker pool.
#[derive(Debug, Clone)]
pub struct ColumnProfiler {
    missing: MissingTokens,
    num_workers: usize,
}

impl Default for ColumnProfiler {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnProfiler {
    /// Creates a profiler with the default missing-token set, running on the
    /// calling thread.
    pub fn new() -> Self {
        Self {
            missing: MissingTokens::default(),
            num_workers: 0,
        }
    }

    /// Sets the missing-token set used during classification.
    #[must_use]
    pub fn missing_tokens(mut self, missing: MissingTokens) -> Self {
        self.missing = missing;
        self
    }

    /// Sets the number of worker threads (0 = run on the calling thread).
    ///
    /// At most `workers` threads run regardless of column count; wide tables
    /// never fan out unboundedly.
    #[must_use]
    pub fn num_workers(mut self, workers: usize) -> Self {
        self.num_workers = workers;
        self
    }

    /// Classifies every column and computes its summary.
    ///
    /// Zero-row columns are recorded in [`ProfileReport::skipped`] and never
    /// dispatched, so summarizers only ever see non-empty input.
    pub fn profile(&self, table: &ColumnTable) -> ProfileReport {
        let mut work = Vec::with_capacity(table.len());
        let mut skipped = Vec::new();

        for (name, values) in table.iter() {
            if values.is_empty() {
                skipped.push(name.to_string());
                continue;
            }
            work.push((name.to_string(), classify(values, &self.missing)));
        }
        skipped.sort();

        let summaries = if self.num_workers == 0 || work.len() <= 1 {
            work.into_iter()
                .map(|(name, column)| summarize(name, column))
                .collect()
        } else {
            run_pool(work, self.num_workers)
        };

        let mut report = ProfileReport {
            skipped,
            ..ProfileReport::default()
        };
        for summary in summaries {
            match summary {
                ColumnSummary::Numeric(s) => report.numeric.push(s),
                ColumnSummary::Categorical(s) => report.categorical.push(s),
            }
        }
        report.numeric.sort_by(|a, b| a.name.cmp(&b.name));
        report.categorical.sort_by(|a, b| a.name.cmp(&b.name));

        report
    }
}

/// Computes the summary for one classified column, consuming its data.
fn summarize(name: String, column: ClassifiedColumn) -> ColumnSummary {
    match column {
        ClassifiedColumn::Numeric(values) => {
            ColumnSummary::Numeric(NumericSummary::compute(name, values))
        }
        ClassifiedColumn::Categorical(values) => {
            ColumnSummary::Categorical(CategoricalSummary::compute(name, &values))
        }
    }
}

/// Runs column work items on a bounded pool and drains the results.
///
/// Workers pull from a shared queue and send into a rendezvous-sized channel;
/// the single consumer below is the only writer of the result collection.
fn run_pool(work: Vec<(String, ClassifiedColumn)>, num_workers: usize) -> Vec<ColumnSummary> {
    let expected = work.len();
    let pool_size = num_workers.min(expected);
    let queue = Arc::new(Mutex::new(work));
    let (tx, rx) = mpsc::sync_channel(pool_size);

    let mut handles = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        let queue = Arc::clone(&queue);
        let tx = tx.clone();
        handles.push(thread::spawn(move || loop {
            // A poisoned lock means another worker panicked; stop cleanly.
            let item = match queue.lock() {
                Ok(mut queue) => queue.pop(),
                Err(_) => break,
            };
            let Some((name, column)) = item else {
                break;
            };
            if tx.send(summarize(name, column)).is_err() {
                break;
            }
        }));
    }
    drop(tx);

    let mut results = Vec::with_capacity(expected);
    for summary in rx {
        results.push(summary);
    }

    for handle in handles {
        let _ = handle.join();
    }

    results
}
