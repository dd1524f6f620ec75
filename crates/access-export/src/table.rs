//! Destination table DDL and the bulk `INSERT ... SELECT` statement.

use crate::core::identifier::{quote_access, quote_list};
use crate::core::{AccessType, ColumnMap, Delimiter, StagedFile, TypeMap};
use crate::error::Result;

/// A column of the destination table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Source column name in the staging file header.
    pub source: String,
    /// Column name in the destination table.
    pub name: String,
    pub data_type: AccessType,
}

/// Destination table derived from a staging file's columns.
#[derive(Debug, Clone)]
pub struct TableDefinition<'a> {
    table_name: &'a str,
    columns: &'a [String],
    column_map: Option<&'a ColumnMap>,
    types: &'a TypeMap,
    delimiter: &'a Delimiter,
    staging: &'a StagedFile,
}

impl<'a> TableDefinition<'a> {
    /// An empty rename map behaves as if none was given.
    pub fn new(
        table_name: &'a str,
        columns: &'a [String],
        column_map: Option<&'a ColumnMap>,
        types: &'a TypeMap,
        delimiter: &'a Delimiter,
        staging: &'a StagedFile,
    ) -> Self {
        Self {
            table_name,
            columns,
            column_map: column_map.filter(|m| !m.is_empty()),
            types,
            delimiter,
            staging,
        }
    }

    pub fn table_name(&self) -> &str {
        self.table_name
    }

    /// Destination name for a source column, or `None` if the rename map
    /// excludes it.
    fn destination_name<'c>(&'c self, source: &'c str) -> Option<&'c str> {
        match self.column_map {
            Some(map) => map.get(source),
            None => Some(source),
        }
    }

    /// Columns of the destination table, in source order.
    pub fn columns(&self) -> Result<Vec<ColumnDef>> {
        let mut defs = Vec::with_capacity(self.columns.len());
        for source in self.columns {
            let data_type = self.types.resolve(source)?;
            let Some(name) = self.destination_name(source) else {
                continue;
            };
            defs.push(ColumnDef {
                source: source.clone(),
                name: name.to_string(),
                data_type,
            });
        }
        Ok(defs)
    }

    /// `(source, destination)` pairs fed by the insert, in source order.
    ///
    /// Auto-increment columns are left for the engine to fill.
    pub fn insert_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(self.columns.len());
        for source in self.columns {
            if self.types.resolve(source)?.is_auto_increment() {
                continue;
            }
            let Some(name) = self.destination_name(source) else {
                continue;
            };
            pairs.push((source.clone(), name.to_string()));
        }
        Ok(pairs)
    }

    /// `CREATE TABLE` statement for the destination table.
    pub fn create_statement(&self) -> Result<String> {
        let definitions = self
            .columns()?
            .iter()
            .map(|c| -> Result<String> {
                Ok(format!("{} {}", quote_access(&c.name)?, c.data_type.keyword()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(format!(
            "CREATE TABLE {} ({})",
            quote_access(self.table_name)?,
            definitions.join(", ")
        ))
    }

    /// `INSERT INTO ... SELECT ... FROM [TEXT;...]` reading the staging file.
    pub fn insert_statement(&self) -> Result<String> {
        let pairs = self.insert_pairs()?;
        let destination = quote_list(pairs.iter().map(|(_, d)| d.as_str()))?;
        let selected = quote_list(pairs.iter().map(|(s, _)| s.as_str()))?;

        Ok(format!(
            "INSERT INTO {} ({}) SELECT {} FROM {}",
            quote_access(self.table_name)?,
            destination,
            selected,
            self.text_source()
        ))
    }

    /// Driver-native reference to the staging file.
    pub fn text_source(&self) -> String {
        format!(
            "[TEXT;HDR=YES;FMT={};Database={}].[{}]",
            self.delimiter.keyword(),
            self.staging.directory().display(),
            self.staging.file_name()
        )
    }
}
