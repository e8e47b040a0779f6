use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::ServerError;

/// Process-wide handle to the listings database.
///
/// The file is opened once, read-only, and the single connection is shared by
/// every request worker. Clones point at the same connection.
#[derive(Clone)]
pub struct Database {
    path: PathBuf,
    conn: Arc<Mutex<Option<Connection>>>,
}

impl Database {
    /// Opens an existing SQLite file in read-only mode.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI,
        )
        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;

        tracing::info!("Opened database {} (read-only)", path.display());

        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    /// Provides the shared connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&Connection) -> Result<T, ServerError>,
    {
        // Read-only, so a worker that panicked mid-query left nothing half-written.
        let slot = self.conn.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering database lock after a worker panic");
            poisoned.into_inner()
        });
        let conn = slot
            .as_ref()
            .ok_or_else(|| ServerError::DbError("database is closed".into()))?;
        f(conn)
    }

    /// Closes the connection. Safe to call more than once.
    pub fn close(&self) {
        let taken = match self.conn.lock() {
            Ok(mut slot) => slot.take(),
            // A worker panicked mid-query; the connection is still ours to close.
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(conn) = taken {
            match conn.close() {
                Ok(()) => tracing::info!("Closed database {}", self.path.display()),
                Err((_, e)) => tracing::error!("Failed to close database: {e}"),
            }
        }
    }
}
