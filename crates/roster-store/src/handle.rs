// ABOUTME: The store handle, an explicit session factory for the person database.
// ABOUTME: Owns initialization (schema), per-call session opening, and explicit shutdown.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::Connection;

use crate::error::StoreError;

/// How long a session waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Session factory for the person store.
///
/// Construct once at startup with [`StoreHandle::open`], hand it to the
/// facade, and call [`StoreHandle::close`] on shutdown. The handle holds no
/// open connection itself; every operation gets a fresh session that is
/// released on drop. Cloning yields another factory over the same database
/// file.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    path: PathBuf,
}

impl StoreHandle {
    /// Open the store at the given database path, creating parent
    /// directories and the schema if they do not exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(StoreError::Unavailable)?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS person (
                person_id  INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT,
                last_name  TEXT
            );",
        )
        .map_err(StoreError::Unavailable)?;

        tracing::debug!("person store schema ready at {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Return the database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh store session. Each caller gets its own connection;
    /// dropping it releases the session.
    pub fn session(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path).map_err(StoreError::Unavailable)?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(StoreError::Unavailable)?;
        Ok(conn)
    }

    /// Shut the store down: checkpoint the WAL back into the main database
    /// file and consume the handle.
    pub fn close(self) -> Result<(), StoreError> {
        let conn = self.session()?;
        conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .map_err(StoreError::Unavailable)?;
        Ok(())
    }
}
