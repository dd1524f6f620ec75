//! # access-export
//!
//! Export delimited text files and in-memory tables into Microsoft Access
//! databases.
//!
//! Rows never pass through this library one by one. Instead it:
//!
//! - **Stages** the data as a delimited text file (or uses the caller's file)
//! - **Describes** that file to the Access text driver with a `schema.ini`
//! - **Creates** the destination table with `CREATE TABLE`
//! - **Imports** everything with a single `INSERT INTO ... SELECT ... FROM [TEXT;...]`
//!
//! The Access engine reads the text file itself, so large files load in one
//! statement.
//!
//! ## Example
//!
//! ```rust,no_run
//! use access_export::{connect, ExportOptions, Exporter, TargetConfig, TypeMap};
//!
//! fn main() -> access_export::Result<()> {
//!     let target = TargetConfig::new("sales.accdb");
//!     let exporter = Exporter::new(connect(&target)?);
//!     let options = ExportOptions {
//!         types: TypeMap::new().with("ID", "primary").with("Total", "currency"),
//!         ..Default::default()
//!     };
//!     let summary = exporter.export_text_file(&target.path, "orders.csv", "Orders", &options)?;
//!     println!("Exported {} columns", summary.columns.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod descriptor;
pub mod error;
pub mod gateway;
pub mod orchestrator;
pub mod registry;
pub mod table;

// Re-exports for convenient access
pub use config::{Config, ExportConfig, TargetConfig};
pub use crate::core::{AccessType, ColumnMap, DataTable, Delimiter, TypeMap};
pub use error::{ExportError, Result};
pub use gateway::{connect, DatabaseGateway, Session};
pub use orchestrator::{
    plan_text_file, ExportOptions, ExportPlan, ExportSummary, Exporter, RunResult,
};
