//! Delimited-text row reading.
//!
//! Reads a delimited file into an ordered sequence of string-field rows.
//! Header interpretation is left to [`crate::table::ColumnTable::assemble`],
//! so every row of the file (header included) appears in the output.

use std::{fs::File, io::Read, path::Path};

use crate::error::{Error, Result};

/// Options controlling how a delimited file is read.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row names the columns.
    pub has_header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
        }
    }
}

impl CsvOptions {
    /// Creates options with the defaults: comma delimiter, header present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether the first row names the columns.
    #[must_use]
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Converts a CLI-supplied delimiter character to its byte form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for non-ASCII characters, which the
    /// byte-oriented CSV reader cannot represent.
    pub fn delimiter_from_char(c: char) -> Result<u8> {
        if c.is_ascii() {
            Ok(c as u8)
        } else {
            Err(Error::invalid_config(format!(
                "delimiter must be a single ASCII character, got '{c}'"
            )))
        }
    }
}

/// Reads all rows from a delimited file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and [`Error::Csv`] for
/// record-level failures from the underlying reader. Rows with inconsistent
/// field counts are not failures; they are passed through as-is.
pub fn read_rows(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(e, path))?;
    read_rows_from(file, options)
}

/// Reads all rows from any byte source.
///
/// # Errors
///
/// Returns [`Error::Csv`] for record-level failures from the underlying
/// reader.
pub fn read_rows_from<R: Read>(reader: R, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
