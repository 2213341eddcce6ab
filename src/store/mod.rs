//! SQLite dataset access.
//!
//! A [`SqliteStore`] holds only the dataset path. Opening the store runs
//! the existence pre-flight; each query then opens a fresh read-only
//! connection, fetches its results, and drops the connection at scope
//! exit, on the error paths included.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::models::KeyValue;

/// Errors raised by the dataset access layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The dataset path does not exist on disk.
    #[error("dataset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A query failed against an existing dataset.
    #[error("query failed on {}: {source}", .path.display())]
    Query {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

/// Read-only handle to a SQLite dataset.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a store, verifying the dataset exists on disk.
    ///
    /// Runs before any query so a mistyped path is reported as an input
    /// error, not a query failure.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Err(StoreError::NotFound(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run an aggregate query returning a single integer.
    pub fn query_count(&self, sql: &str) -> Result<i64, StoreError> {
        debug!("executing on {}: {}", self.path.display(), sql);
        let conn = self.connect()?;
        conn.query_row(sql, [], |row| row.get(0))
            .map_err(|source| self.query_err(source))
    }

    /// Run a query projecting a single column, collecting every row.
    pub fn query_values(&self, sql: &str) -> Result<Vec<KeyValue>, StoreError> {
        debug!("executing on {}: {}", self.path.display(), sql);
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql).map_err(|source| self.query_err(source))?;
        let values = stmt
            .query_map([], |row| row.get::<_, rusqlite::types::Value>(0))
            .map_err(|source| self.query_err(source))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| self.query_err(source))?;

        // Nulls never satisfy the orphan predicate.
        Ok(values.into_iter().filter_map(KeyValue::from_sql).collect())
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| self.query_err(source))
    }

    fn query_err(&self, source: rusqlite::Error) -> StoreError {
        StoreError::Query {
            path: self.path.clone(),
            source,
        }
    }
}
