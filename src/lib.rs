//! # colstat
//!
//! Column-level descriptive statistics for delimited text files.
//!
//! colstat transposes a delimited file into named columns, classifies each
//! column as numeric or categorical, and computes per-column summaries on a
//! bounded worker pool:
//!
//! - **Numeric columns** (every non-missing value parses as `f64`) — min,
//!   max, mean, population standard deviation, median, and index-based
//!   quartiles
//! - **Categorical columns** (everything else) — unique count, mode, top-3
//!   frequent values, and the full frequency table
//!
//! Missing values are detected against a configurable token set before
//! classification; in numeric columns they are dropped, in categorical
//! columns they become the `"NA"` sentinel.
//!
//! ## Modules
//!
//! - [`reader`] — delimited-text row reading (delimiter, header flag, field
//!   trimming)
//! - [`table`] — column-major assembly of rows into named columns
//! - [`classify`] — numeric-vs-categorical inference and missing-value
//!   handling
//! - [`summary`] — numeric and categorical summarizers
//! - [`profile`] — concurrent per-column dispatch and aggregation
//! - [`report`] — text and JSON rendering
//! - [`cli`] — command-line interface
//! - [`error`] — error types
//!
//! ## Quick Start
//!
//! ```
//! use colstat::{ColumnProfiler, ColumnTable, CsvOptions};
//!
//! let csv = "name,score\nAlice,1.5\nBob,2.5\nAlice,3.5\n";
//! let rows = colstat::reader::read_rows_from(csv.as_bytes(), &CsvOptions::default()).unwrap();
//! let table = ColumnTable::assemble(rows, true);
//!
//! let report = ColumnProfiler::new().num_workers(2).profile(&table);
//! assert_eq!(report.numeric.len(), 1);
//! assert_eq!(report.categorical.len(), 1);
//! assert_eq!(report.categorical[0].mode, "Alice");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::cast_precision_loss
    )
)]
#![allow(clippy::uninlined_format_args)]

pub mod classify;
pub mod cli;
pub mod error;
pub mod profile;
pub mod reader;
pub mod report;
pub mod summary;
pub mod table;

// Re-exports for convenience
pub use classify::{ClassifiedColumn, MissingTokens, MISSING_SENTINEL};
pub use error::{Error, Result};
pub use profile::{ColumnProfiler, ColumnSummary, ProfileReport};
pub use reader::CsvOptions;
pub use summary::{CategoricalSummary, NumericSummary};
pub use table::ColumnTable;
