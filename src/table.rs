//! Column-major assembly of row-oriented records.

use std::collections::HashMap;

/// A dataset transposed into named columns.
///
/// Each column holds the raw string values observed under its header, in row
/// order. Column lengths may differ: short rows simply contribute fewer
/// values, and callers must tolerate uneven lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    /// Unique column names in order of first appearance.
    names: Vec<String>,
    columns: HashMap<String, Vec<String>>,
}

impl ColumnTable {
    /// Builds a table from ordered rows.
    ///
    /// With `has_header` the first row names the columns; otherwise synthetic
    /// names `col1, col2, ...` are generated from the first row's width and
    /// the first row is kept as data. Duplicate header names share one
    /// column. Zero rows yield an empty table.
    pub fn assemble(rows: Vec<Vec<String>>, has_header: bool) -> Self {
        let mut iter = rows.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let (fields, seed) = if has_header {
            (first, None)
        } else {
            let fields = (1..=first.len()).map(|i| format!("col{i}")).collect();
            (fields, Some(first))
        };

        let mut table = Self::default();
        for name in &fields {
            if !table.columns.contains_key(name) {
                table.names.push(name.clone());
                table.columns.insert(name.clone(), Vec::new());
            }
        }

        if let Some(row) = seed {
            table.push_row(&fields, row);
        }
        for row in iter {
            table.push_row(&fields, row);
        }

        table
    }

    /// Appends one row, mapping values positionally onto the header fields.
    /// Values past the last field are dropped.
    fn push_row(&mut self, fields: &[String], row: Vec<String>) {
        for (i, value) in row.into_iter().enumerate() {
            let Some(name) = fields.get(i) else {
                break;
            };
            if let Some(column) = self.columns.get_mut(name) {
                column.push(value);
            }
        }
    }

    /// Column names in canonical (first-appearance) order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The raw values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(name, values)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names.iter().filter_map(move |name| {
            self.columns
                .get(name)
                .map(|values| (name.as_str(), values.as_slice()))
        })
    }
}
