//! `schema.ini` generation for the Access text driver.
//!
//! The descriptor tells the driver how to parse one staging file:
//!
//! ```text
//! [abcdefghij.txt]
//! ColNameHeader=True
//! CharacterSet=65001
//! Format=CSVDelimited
//! Col1="Name" Text
//! Col2="Age" Long
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::core::{Delimiter, TypeMap};
use crate::error::Result;
use crate::registry;

pub use crate::core::SCHEMA_FILE;

/// Descriptor for a single staging text file.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor<'a> {
    text_file: &'a str,
    columns: &'a [String],
    types: &'a TypeMap,
    delimiter: &'a Delimiter,
    encoding: &'a str,
}

impl<'a> SchemaDescriptor<'a> {
    pub fn new(
        text_file: &'a str,
        columns: &'a [String],
        types: &'a TypeMap,
        delimiter: &'a Delimiter,
        encoding: &'a str,
    ) -> Self {
        Self {
            text_file,
            columns,
            types,
            delimiter,
            encoding,
        }
    }

    /// Lines of the descriptor, generated lazily.
    ///
    /// Column lines resolve their type as they are produced, so iteration
    /// yields `DataTypeNotFound` at the first unsupported column.
    pub fn lines(&self) -> impl Iterator<Item = Result<String>> + '_ {
        let header = [
            format!("[{}]", self.text_file),
            "ColNameHeader=True".to_string(),
            registry::charset_clause(self.encoding),
            format!("Format={}", self.delimiter.keyword()),
        ];

        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(move |(i, column)| -> Result<String> {
                let ty = self.types.resolve(column)?;
                Ok(format!("Col{}=\"{}\" {}", i + 1, column, ty.descriptor_name()))
            });

        header.into_iter().map(Ok).chain(columns)
    }

    /// Write the descriptor line by line, newline-terminated.
    ///
    /// Lines already written stay written if a later column fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            let line = line?;
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render the whole descriptor to a string.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Create (or replace) the descriptor file at `path`.
    ///
    /// The file handle is closed when this returns, on success or failure.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        debug!("Writing descriptor {:?} for {}", path, self.text_file);
        let mut out = BufWriter::new(File::create(path)?);
        let written = self.write_to(&mut out);
        // Flush whatever was produced even when a column failed.
        let flushed = out.flush();
        written?;
        flushed?;
        Ok(())
    }
}
