//! Export orchestrator - stages data, writes the descriptor, runs the SQL.
//!
//! Both entry points end in the same routine:
//!
//! 1. Build the destination table definition
//! 2. Write `schema.ini` next to the staging file
//! 3. Generate `CREATE TABLE` (unless appending) and `INSERT ... SELECT`
//! 4. Open the database through the gateway, execute, commit
//!
//! Cleanup runs afterwards whatever happened: a synthesized staging
//! directory is removed entirely, while for a caller's text file only the
//! descriptor is deleted.

pub mod staging;

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::core::{DataTable, StagedFile};
use crate::descriptor::SchemaDescriptor;
use crate::error::Result;
use crate::gateway::{DatabaseGateway, Session};
use crate::table::TableDefinition;
use staging::Cleanup;

pub use crate::core::ExportOptions;

/// Outcome of one successful export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Destination table.
    pub table: String,

    /// Destination database file.
    pub database: PathBuf,

    /// Staging file the rows were read from.
    pub staging_file: PathBuf,

    /// Destination columns in table order.
    pub columns: Vec<String>,

    /// Whether `CREATE TABLE` was issued.
    pub created_table: bool,

    /// Rows written to the staging file, when known.
    pub rows_staged: Option<usize>,

    /// When the export started.
    pub started_at: DateTime<Utc>,

    /// Total duration in seconds.
    pub duration_seconds: f64,
}

impl ExportSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Everything an export would generate, without touching any database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPlan {
    pub table: String,
    pub staging_file: PathBuf,
    /// Full `schema.ini` content.
    pub descriptor: String,
    /// `None` when appending.
    pub create_statement: Option<String>,
    pub insert_statement: String,
}

/// Result of running every export in a configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Final status.
    pub status: String,

    /// Total duration in seconds.
    pub duration_seconds: f64,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run completed.
    pub completed_at: DateTime<Utc>,

    /// Total exports attempted.
    pub exports_total: usize,

    /// Exports that succeeded.
    pub exports_success: usize,

    /// Exports that failed.
    pub exports_failed: usize,

    /// Tables whose export failed.
    pub failed_tables: Vec<String>,

    /// Per-export summaries for the successful exports.
    pub exports: Vec<ExportSummary>,
}

impl RunResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs exports against a database gateway.
pub struct Exporter<G> {
    gateway: G,
    staging_root: Option<PathBuf>,
}

impl<G: DatabaseGateway> Exporter<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            staging_root: None,
        }
    }

    /// Create staging directories under `root` instead of the system
    /// temporary directory.
    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = Some(root.into());
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Export an in-memory table.
    ///
    /// Returns `Ok(None)` without creating anything when the table has no
    /// rows.
    pub fn export_table(
        &self,
        table: &DataTable,
        database: impl AsRef<Path>,
        table_name: &str,
        options: &ExportOptions,
    ) -> Result<Option<ExportSummary>> {
        if table.is_empty() {
            debug!("Table {} has no rows; nothing to export", table_name);
            return Ok(None);
        }

        let started = Instant::now();
        let started_at = Utc::now();
        let database = database.as_ref();
        let dir = staging::create_staging_dir(self.staging_root.as_deref())?;
        let staged = StagedFile::new(dir.path(), format!("{}.txt", staging::random_stem()));
        let cleanup = Cleanup::RemoveDirectory(dir);

        let outcome = table
            .write_delimited(&staged.path(), &options.delimiter, &options.encoding)
            .and_then(|()| self.push(&staged, table.columns(), database, table_name, options));

        let columns = staging::finish(outcome, cleanup)?;
        Ok(Some(ExportSummary {
            table: table_name.to_string(),
            database: database.to_path_buf(),
            staging_file: staged.path(),
            columns,
            created_table: !options.append,
            rows_staged: Some(table.row_count()),
            started_at,
            duration_seconds: started.elapsed().as_secs_f64(),
        }))
    }

    /// Export an existing delimited text file with a header row.
    ///
    /// The file itself is left untouched; only the descriptor written next
    /// to it is removed afterwards.
    pub fn export_text_file(
        &self,
        database: impl AsRef<Path>,
        source: impl AsRef<Path>,
        table_name: &str,
        options: &ExportOptions,
    ) -> Result<ExportSummary> {
        let started = Instant::now();
        let started_at = Utc::now();
        let database = database.as_ref();
        let staged = StagedFile::locate(source.as_ref())?;
        let header = staging::read_header(&staged.path(), &options.delimiter, &options.encoding)?;
        let cleanup = Cleanup::RemoveDescriptor(staged.descriptor_path());

        let outcome = self.push(&staged, &header, database, table_name, options);

        let columns = staging::finish(outcome, cleanup)?;
        Ok(ExportSummary {
            table: table_name.to_string(),
            database: database.to_path_buf(),
            staging_file: staged.path(),
            columns,
            created_table: !options.append,
            rows_staged: None,
            started_at,
            duration_seconds: started.elapsed().as_secs_f64(),
        })
    }

    /// Run every export in `config`, continuing past failures.
    pub fn run(&self, config: &Config) -> Result<RunResult> {
        let started = Instant::now();
        let started_at = Utc::now();
        let mut exports = Vec::new();
        let mut failed_tables = Vec::new();

        for export in &config.exports {
            let outcome = export.options().and_then(|options| {
                self.export_text_file(
                    &config.target.path,
                    &export.source,
                    &export.table,
                    &options,
                )
            });
            match outcome {
                Ok(summary) => exports.push(summary),
                Err(e) => {
                    error!(
                        "Export of {} into {} failed: {}",
                        export.source.display(),
                        export.table,
                        e
                    );
                    failed_tables.push(export.table.clone());
                }
            }
        }

        let exports_failed = failed_tables.len();
        let status = if exports_failed == 0 { "completed" } else { "failed" };
        Ok(RunResult {
            status: status.to_string(),
            duration_seconds: started.elapsed().as_secs_f64(),
            started_at,
            completed_at: Utc::now(),
            exports_total: config.exports.len(),
            exports_success: exports.len(),
            exports_failed,
            failed_tables,
            exports,
        })
    }

    /// Shared routine for both entry points. Cleanup is the caller's job.
    ///
    /// Returns the destination column names.
    fn push(
        &self,
        staged: &StagedFile,
        columns: &[String],
        database: &Path,
        table_name: &str,
        options: &ExportOptions,
    ) -> Result<Vec<String>> {
        info!(
            "Exporting {} into {} ({})",
            staged.file_name(),
            table_name,
            database.display()
        );

        let definition = TableDefinition::new(
            table_name,
            columns,
            options.column_map.as_ref(),
            &options.types,
            &options.delimiter,
            staged,
        );

        SchemaDescriptor::new(
            staged.file_name(),
            columns,
            &options.types,
            &options.delimiter,
            &options.encoding,
        )
        .write_file(&staged.descriptor_path())?;

        let create = if options.append {
            None
        } else {
            Some(definition.create_statement()?)
        };
        let insert = definition.insert_statement()?;
        let destination_columns: Vec<String> = definition
            .columns()?
            .into_iter()
            .map(|c| c.name)
            .collect();

        let mut work = |session: &mut dyn Session| -> Result<()> {
            if let Some(sql) = &create {
                debug!("{}", sql);
                session.execute(sql)?;
            }
            debug!("{}", insert);
            session.execute(&insert)?;
            session.commit()
        };
        self.gateway
            .with_connection(database, options.overwrite, &mut work)?;

        info!("Exported {} into {}", staged.file_name(), table_name);
        Ok(destination_columns)
    }
}

/// Generate the descriptor and statements for a text-file export without
/// writing any file or opening any connection.
pub fn plan_text_file(
    source: impl AsRef<Path>,
    table_name: &str,
    options: &ExportOptions,
) -> Result<ExportPlan> {
    let staged = StagedFile::locate(source.as_ref())?;
    let columns = staging::read_header(&staged.path(), &options.delimiter, &options.encoding)?;

    let descriptor = SchemaDescriptor::new(
        staged.file_name(),
        &columns,
        &options.types,
        &options.delimiter,
        &options.encoding,
    )
    .render()?;

    let definition = TableDefinition::new(
        table_name,
        &columns,
        options.column_map.as_ref(),
        &options.types,
        &options.delimiter,
        &staged,
    );
    let create_statement = if options.append {
        None
    } else {
        Some(definition.create_statement()?)
    };

    Ok(ExportPlan {
        table: table_name.to_string(),
        staging_file: staged.path(),
        descriptor,
        create_statement,
        insert_statement: definition.insert_statement()?,
    })
}
