//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::options::default_encoding;
use crate::core::{ColumnMap, Delimiter, ExportOptions, TypeMap};
use crate::error::Result;

/// Default ODBC driver for `.mdb` and `.accdb` files.
pub const DEFAULT_ACCESS_DRIVER: &str = "Microsoft Access Driver (*.mdb, *.accdb)";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Destination database configuration.
    pub target: TargetConfig,

    /// Text files to export, in order.
    #[serde(default)]
    pub exports: Vec<ExportConfig>,
}

/// Destination Access database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Database file (`.accdb` or `.mdb`).
    pub path: PathBuf,

    /// Blank database copied into place when a new database is needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// ODBC driver name.
    #[serde(default = "default_driver")]
    pub driver: String,
}

impl TargetConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            template: None,
            driver: default_driver(),
        }
    }
}

/// A single text file to export into the target database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Delimited text file with a header row.
    pub source: PathBuf,

    /// Destination table name.
    pub table: String,

    /// Field delimiter (default: ",").
    #[serde(default)]
    pub delimiter: Delimiter,

    /// Encoding name for `CharacterSet=` (default: "UTF-8").
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Insert into an existing table instead of creating it.
    #[serde(default)]
    pub append: bool,

    /// Recreate the database file before exporting.
    #[serde(default)]
    pub overwrite: bool,

    /// Column type tokens; unlisted columns are TEXT.
    #[serde(default)]
    pub types: TypeMap,

    /// Source → destination column names. Unlisted columns are dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnMap>,
}

impl ExportConfig {
    /// Export options for this entry.
    pub fn options(&self) -> Result<ExportOptions> {
        self.types.validate()?;
        Ok(ExportOptions {
            column_map: self.columns.clone(),
            types: self.types.clone(),
            delimiter: self.delimiter.clone(),
            append: self.append,
            overwrite: self.overwrite,
            encoding: self.encoding.clone(),
        })
    }
}

// Default value functions for serde
fn default_driver() -> String {
    DEFAULT_ACCESS_DRIVER.to_string()
}
