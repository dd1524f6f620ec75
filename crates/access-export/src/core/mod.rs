//! Core types shared by the descriptor and table builders.
//!
//! - [`types`]: Access column types, type/rename maps and the delimiter token
//! - [`identifier`]: identifier validation and backtick quoting
//! - [`frame`]: in-memory tables staged through a delimited text file
//! - [`staged`]: the text file an export reads from, and its descriptor path
//! - [`options`]: per-export options

pub mod frame;
pub mod identifier;
pub mod options;
pub mod staged;
pub mod types;

pub use frame::DataTable;
pub use options::{ExportOptions, DEFAULT_ENCODING};
pub use staged::{StagedFile, SCHEMA_FILE};
pub use types::{AccessType, ColumnMap, Delimiter, TypeMap, AUTO_INCREMENT_TOKEN};
