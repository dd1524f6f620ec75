//! Scoped access to the destination database.
//!
//! The gateway owns the lifecycle of a single connection per export:
//! create the database file if needed, connect, hand a [`Session`] to the
//! caller's work, then close. Closing happens on every exit path; a failed
//! unit of work is rolled back before the connection is released.

#[cfg(feature = "odbc")]
mod odbc;

#[cfg(feature = "odbc")]
pub use odbc::OdbcGateway;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::TargetConfig;
use crate::error::{ExportError, Result};

/// Statement execution on an open connection.
pub trait Session {
    /// Execute a statement that returns no rows.
    fn execute(&mut self, sql: &str) -> Result<()>;

    /// Commit everything executed so far.
    fn commit(&mut self) -> Result<()>;
}

/// Opens one connection, runs a unit of work against it, and closes it.
pub trait DatabaseGateway {
    /// Open `database` (creating it first when missing or when `overwrite`
    /// is set), run `work`, and close the connection whatever the outcome.
    fn with_connection(
        &self,
        database: &Path,
        overwrite: bool,
        work: &mut dyn FnMut(&mut dyn Session) -> Result<()>,
    ) -> Result<()>;
}

impl<G: DatabaseGateway + ?Sized> DatabaseGateway for Box<G> {
    fn with_connection(
        &self,
        database: &Path,
        overwrite: bool,
        work: &mut dyn FnMut(&mut dyn Session) -> Result<()>,
    ) -> Result<()> {
        (**self).with_connection(database, overwrite, work)
    }
}

/// Creates new, empty database files.
pub trait DatabaseCreator {
    fn create(&self, path: &Path) -> Result<()>;
}

/// Creates databases by copying a blank template database file.
#[derive(Debug, Clone, Default)]
pub struct TemplateCreator {
    template: Option<PathBuf>,
}

impl TemplateCreator {
    pub fn new(template: Option<PathBuf>) -> Self {
        Self { template }
    }
}

impl DatabaseCreator for TemplateCreator {
    fn create(&self, path: &Path) -> Result<()> {
        let template = self.template.as_ref().ok_or_else(|| {
            ExportError::creation(
                path,
                "no blank template database configured (set target.template)",
            )
        })?;
        if !template.is_file() {
            return Err(ExportError::creation(
                path,
                format!("template database {} does not exist", template.display()),
            ));
        }
        std::fs::copy(template, path).map_err(|e| {
            ExportError::creation(
                path,
                format!("copy from {} failed: {}", template.display(), e),
            )
        })?;
        info!("Created database {} from {}", path.display(), template.display());
        Ok(())
    }
}

/// Treat a bare file name as relative to the current directory.
pub fn normalize_database_path(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(".").join(path),
    }
}

/// Create the database file if it is missing or `overwrite` is requested.
///
/// Returns true when a new file was created.
pub fn ensure_database(
    path: &Path,
    overwrite: bool,
    creator: &dyn DatabaseCreator,
) -> Result<bool> {
    if path.is_file() && !overwrite {
        return Ok(false);
    }
    creator.create(path)?;
    Ok(true)
}

/// ODBC connection string for an Access database file.
pub fn connection_string(driver: &str, database: &Path) -> String {
    format!("Driver={{{}}};DBQ={};", driver, database.display())
}

/// Build the gateway described by `target`.
#[cfg(feature = "odbc")]
pub fn connect(target: &TargetConfig) -> Result<Box<dyn DatabaseGateway>> {
    let creator = TemplateCreator::new(target.template.clone());
    Ok(Box::new(OdbcGateway::new(&target.driver, creator)?))
}

/// Build the gateway described by `target`.
#[cfg(not(feature = "odbc"))]
pub fn connect(target: &TargetConfig) -> Result<Box<dyn DatabaseGateway>> {
    Err(ExportError::Config(format!(
        "cannot open {}: this build has no ODBC support (rebuild with `--features odbc`)",
        target.path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingCreator {
        calls: Cell<usize>,
    }

    impl DatabaseCreator for CountingCreator {
        fn create(&self, path: &Path) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            std::fs::write(path, b"db")?;
            Ok(())
        }
    }

    #[test]
    fn test_normalize_bare_file_name() {
        assert_eq!(
            normalize_database_path(Path::new("sales.accdb")),
            Path::new(".").join("sales.accdb")
        );
    }

    #[test]
    fn test_normalize_keeps_directories() {
        assert_eq!(
            normalize_database_path(Path::new("out/sales.accdb")),
            PathBuf::from("out/sales.accdb")
        );
        assert_eq!(
            normalize_database_path(Path::new("./sales.accdb")),
            PathBuf::from("./sales.accdb")
        );
    }

    #[test]
    fn test_connection_string() {
        assert_eq!(
            connection_string(
                "Microsoft Access Driver (*.mdb, *.accdb)",
                Path::new("./sales.accdb")
            ),
            "Driver={Microsoft Access Driver (*.mdb, *.accdb)};DBQ=./sales.accdb;"
        );
    }

    #[test]
    fn test_ensure_database_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.accdb");
        let creator = CountingCreator { calls: Cell::new(0) };

        assert!(ensure_database(&path, false, &creator).unwrap());
        assert!(path.is_file());
        assert!(!ensure_database(&path, false, &creator).unwrap());
        assert_eq!(creator.calls.get(), 1);
    }

    #[test]
    fn test_ensure_database_overwrite_recreates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.accdb");
        std::fs::write(&path, b"old").unwrap();
        let creator = CountingCreator { calls: Cell::new(0) };

        assert!(ensure_database(&path, true, &creator).unwrap());
        assert_eq!(creator.calls.get(), 1);
        assert_eq!(std::fs::read(&path).unwrap(), b"db");
    }

    #[test]
    fn test_template_creator_copies_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("blank.accdb");
        std::fs::write(&template, b"blank database").unwrap();
        let target = dir.path().join("out.accdb");

        TemplateCreator::new(Some(template)).create(&target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"blank database");
    }

    #[test]
    fn test_template_creator_without_template() {
        let dir = tempfile::tempdir().unwrap();
        let err = TemplateCreator::default()
            .create(&dir.path().join("out.accdb"))
            .unwrap_err();
        assert!(matches!(err, ExportError::DatabaseCreation { .. }));
    }

    #[test]
    fn test_template_creator_missing_template_file() {
        let dir = tempfile::tempdir().unwrap();
        let creator = TemplateCreator::new(Some(dir.path().join("missing.accdb")));
        assert!(creator.create(&dir.path().join("out.accdb")).is_err());
    }

    #[cfg(not(feature = "odbc"))]
    #[test]
    fn test_connect_without_odbc_feature() {
        let err = connect(&TargetConfig::new("out.accdb")).err().unwrap();
        assert!(err.to_string().contains("--features odbc"));
    }
}
