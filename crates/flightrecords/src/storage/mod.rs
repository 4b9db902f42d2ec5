//! Storage layer for flightrecords.
//!
//! This module owns the single `SQLite` connection. It is opened once at
//! startup and lent by reference to the data-access layer; nothing in the
//! crate holds a global connection.

pub mod bootstrap;
pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::dao::SqliteFlightDao;
use crate::error::{Error, Result};

/// Path reported for in-memory databases.
const MEMORY_PATH: &str = ":memory:";

/// An open flights database.
#[derive(Debug)]
pub struct Database {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// and brings the schema up to date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| {
            error!("Error connecting to database at {}: {}", path.display(), source);
            Error::DatabaseOpen {
                path: path.clone(),
                source,
            }
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        migrations::initialize_schema(&conn)?;

        info!("Database connection established at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory database, private to this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(MEMORY_PATH),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(MEMORY_PATH),
            conn,
        })
    }

    /// Open the database described by `config`.
    ///
    /// Applies the configured busy timeout and, when `bootstrap.seed_on_open`
    /// is set, resets the flights table to the seed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if opening, configuring or seeding the database fails.
    pub fn open_with_config(config: &Config) -> Result<Self> {
        let db = if config.storage.in_memory {
            Self::open_in_memory()?
        } else {
            Self::open(config.database_path())?
        };

        db.set_busy_timeout(config.busy_timeout())?;

        if config.bootstrap.seed_on_open {
            db.reset_and_seed()?;
        }

        Ok(db)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == MEMORY_PATH
    }

    /// Borrow the underlying connection.
    #[must_use]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Data-access object borrowing this database's connection.
    #[must_use]
    pub fn flight_dao(&self) -> SqliteFlightDao<'_> {
        SqliteFlightDao::new(&self.conn)
    }

    /// Recreate the flights table and load the seed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any bootstrap statement fails.
    pub fn reset_and_seed(&self) -> Result<()> {
        bootstrap::reset_and_seed(&self.conn)
    }

    /// Set how long `SQLite` waits on a locked database.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout cannot be applied.
    pub fn set_busy_timeout(&self, timeout: Duration) -> Result<()> {
        self.conn.busy_timeout(timeout)?;
        Ok(())
    }
}
