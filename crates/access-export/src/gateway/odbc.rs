//! ODBC gateway for Access databases.
//!
//! **Requirements:**
//! - The `odbc` feature must be enabled
//! - An ODBC driver manager plus the Microsoft Access Database Engine
//!   (`Microsoft Access Driver (*.mdb, *.accdb)`) must be installed. The
//!   engine ships with Office or as the standalone redistributable and is
//!   only available on Windows.
//!
//! The text-file import itself (`INSERT ... SELECT ... FROM [TEXT;...]`)
//! runs inside the Access engine, so nothing here streams rows.

use std::path::Path;

use odbc_api::{Connection, ConnectionOptions, Environment};
use tracing::{debug, info, warn};

use super::{
    connection_string, ensure_database, normalize_database_path, DatabaseCreator,
    DatabaseGateway, Session, TemplateCreator,
};
use crate::error::{ExportError, Result};

/// Gateway that connects through the Access ODBC driver.
pub struct OdbcGateway<C: DatabaseCreator = TemplateCreator> {
    env: Environment,
    driver: String,
    creator: C,
}

impl<C: DatabaseCreator> OdbcGateway<C> {
    /// Create the ODBC environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the ODBC environment cannot be allocated
    /// (driver manager not installed).
    pub fn new(driver: &str, creator: C) -> Result<Self> {
        let env = Environment::new().map_err(|e| {
            ExportError::Config(format!(
                "Failed to create ODBC environment: {}.\n\n\
                 Exporting requires an ODBC driver manager and the Microsoft Access \
                 Database Engine ({}).",
                e, driver
            ))
        })?;

        Ok(Self {
            env,
            driver: driver.to_string(),
            creator,
        })
    }
}

impl<C: DatabaseCreator> DatabaseGateway for OdbcGateway<C> {
    fn with_connection(
        &self,
        database: &Path,
        overwrite: bool,
        work: &mut dyn FnMut(&mut dyn Session) -> Result<()>,
    ) -> Result<()> {
        let path = normalize_database_path(database);
        if ensure_database(&path, overwrite, &self.creator)? {
            debug!("Using newly created database {}", path.display());
        }

        let conn_str = connection_string(&self.driver, &path);
        debug!("ODBC connection string: {}", conn_str);
        let conn = self
            .env
            .connect_with_connection_string(&conn_str, ConnectionOptions::default())?;
        conn.set_autocommit(false)?;
        info!("Connected to {}", path.display());

        let mut session = OdbcSession { conn: &conn };
        let outcome = work(&mut session);

        if outcome.is_err() {
            if let Err(e) = conn.rollback() {
                warn!("Rollback after failed export did not complete: {}", e);
            }
        }

        // Dropping the connection disconnects.
        drop(conn);
        outcome
    }
}

struct OdbcSession<'c, 'env> {
    conn: &'c Connection<'env>,
}

impl Session for OdbcSession<'_, '_> {
    fn execute(&mut self, sql: &str) -> Result<()> {
        debug!("Executing: {}", sql);
        self.conn.execute(sql, ())?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.conn.commit()?;
        Ok(())
    }
}
