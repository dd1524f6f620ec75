//! In-memory tabular data that can be staged to a delimited text file.

use std::path::Path;

use crate::core::types::Delimiter;
use crate::error::{ExportError, Result};
use crate::registry;

/// Ordered column names plus rows of text cells.
///
/// Cells are written verbatim; an empty string is read back by the text
/// driver as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table from columns and rows, checking every row's width.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<String>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidRow` if the row width differs from the
    /// number of columns.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(ExportError::InvalidRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// A table with no rows has nothing to export.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write a header line and every row to `path` in `encoding`, without
    /// an index column.
    pub fn write_delimited(
        &self,
        path: &Path,
        delimiter: &Delimiter,
        encoding: &str,
    ) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter.as_byte()?)
            .from_writer(Vec::new());
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let text = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;

        let codec = registry::text_encoding(encoding);
        std::fs::write(path, registry::encode_text(&String::from_utf8_lossy(&text), codec))?;
        Ok(())
    }
}
