//! Options shared by every export entry point.

use crate::core::types::{ColumnMap, Delimiter, TypeMap};

/// Encoding assumed when none is configured.
pub const DEFAULT_ENCODING: &str = "UTF-8";

pub(crate) fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

/// Per-export options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Source → destination column names. When non-empty, unlisted columns
    /// are excluded.
    pub column_map: Option<ColumnMap>,
    /// Column type tokens; unlisted columns are TEXT.
    pub types: TypeMap,
    pub delimiter: Delimiter,
    /// Skip `CREATE TABLE` and insert into an existing table.
    pub append: bool,
    /// Recreate the database file even if it exists.
    pub overwrite: bool,
    /// Encoding of the text file, named as in the code-page registry.
    pub encoding: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            column_map: None,
            types: TypeMap::new(),
            delimiter: Delimiter::comma(),
            append: false,
            overwrite: false,
            encoding: default_encoding(),
        }
    }
}
