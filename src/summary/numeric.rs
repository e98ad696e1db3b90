//! Descriptive statistics for numeric columns.

use serde::Serialize;

/// Order statistics and moments for one numeric column.
///
/// Standard deviation is the population form (divisor `n`). Quartiles are
/// selected by direct indexing into the sorted values at `n * p / 100`, not
/// by interpolation; consumers relying on exact values must replicate that
/// index formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Column name.
    pub name: String,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value; the average of the two middle values for even lengths.
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// 25th percentile.
    pub q25: f64,
    /// 50th percentile, always equal to the median.
    pub q50: f64,
    /// 75th percentile.
    pub q75: f64,
}

impl NumericSummary {
    /// Computes the summary over a non-empty value sequence.
    ///
    /// Takes ownership of the values and sorts them in place. Callers
    /// guarantee non-empty input; the classifier never emits an empty
    /// numeric column.
    pub fn compute(name: impl Into<String>, mut values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty(), "numeric summary over empty column");
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = values.len();
        let min = values[0];
        let max = values[n - 1];
        let mean = values.iter().sum::<f64>() / n as f64;

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        let std_dev = variance.sqrt();

        let mid = n / 2;
        let median = if n % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        let q25 = values[n * 25 / 100];
        let q75 = values[n * 75 / 100];

        Self {
            name: name.into(),
            min,
            max,
            mean,
            median,
            std_dev,
            q25,
            q50: median,
            q75,
        }
    }
}
