//! Per-column descriptive statistics.
//!
//! One summarizer per column type: [`NumericSummary`] computes order
//! statistics and moments over a sorted float sequence, and
//! [`CategoricalSummary`] computes the frequency profile of a string
//! sequence. Both are immutable once computed.

mod categorical;
mod numeric;


pub use categorical::CategoricalSummary;
pub use numeric::NumericSummary;
