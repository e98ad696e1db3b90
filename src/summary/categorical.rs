//! Frequency statistics for categorical columns.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// Frequency profile of one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    /// Column name.
    pub name: String,
    /// Number of distinct values, counting the `"NA"` sentinel if present.
    pub unique_count: usize,
    /// Most frequent value. Ties break toward the value seen earliest in
    /// the input.
    pub mode: String,
    /// Up to three values ordered by descending frequency, same tie-break
    /// as the mode.
    pub top_frequent: Vec<String>,
    /// Occurrence count per distinct value.
    pub frequencies: BTreeMap<String, usize>,
}

impl CategoricalSummary {
    /// Computes the frequency profile. Empty input is allowed and yields an
    /// empty summary.
    pub fn compute(name: impl Into<String>, values: &[String]) -> Self {
        let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for (i, value) in values.iter().enumerate() {
            first_seen.entry(value.as_str()).or_insert(i);
            *frequencies.entry(value.clone()).or_insert(0) += 1;
        }

        // Rank by descending count; ties go to the earliest first occurrence
        // so the result does not depend on map iteration order.
        let mut ranked: Vec<(&String, usize)> =
            frequencies.iter().map(|(v, &c)| (v, c)).collect();
        ranked.sort_by_key(|&(v, c)| (std::cmp::Reverse(c), first_seen[v.as_str()]));

        let mode = ranked.first().map(|&(v, _)| v.clone()).unwrap_or_default();
        let top_frequent: Vec<String> = ranked.iter().take(3).map(|&(v, _)| v.clone()).collect();

        Self {
            name: name.into(),
            unique_count: frequencies.len(),
            mode,
            top_frequent,
            frequencies,
        }
    }

    /// Total number of observed values (the sum of all frequencies).
    pub fn total_count(&self) -> usize {
        self.frequencies.values().sum()
    }
}
