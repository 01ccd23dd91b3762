//! SQLite-backed snapshot store for computed location scores.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use super::{CachedLocation, ScoreStore};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS location_scores (
    key TEXT PRIMARY KEY,
    payload TEXT NOT NULL,
    last_updated TEXT NOT NULL
)";

/// Error raised when reading or writing cached snapshots.
#[derive(Debug, Error)]
pub enum SqliteScoreStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A snapshot could not be encoded as JSON.
    #[error("failed to encode snapshot for key {key}: {source}")]
    Encode {
        /// Cache key being written.
        key: String,
        /// JSON encoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// Generic SQLite error when reading or writing rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Snapshot store persisted in a single SQLite table.
///
/// Rows that no longer decode are logged and treated as cache misses.
pub struct SqliteScoreStore {
    connection: Connection,
}

impl fmt::Debug for SqliteScoreStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteScoreStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteScoreStore {
    /// Open (creating if needed) the store at `database_path`.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteScoreStoreError>
    where
        P: AsRef<Path>,
    {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open(database_path).map_err(|source| SqliteScoreStoreError::OpenDatabase {
                path: database_path.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self, SqliteScoreStoreError> {
        let connection = Connection::open_in_memory()?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, SqliteScoreStoreError> {
        connection.execute(CREATE_TABLE, [])?;
        Ok(Self { connection })
    }
}

impl ScoreStore for SqliteScoreStore {
    type Error = SqliteScoreStoreError;

    fn get(&self, key: &str) -> Result<Option<CachedLocation>, Self::Error> {
        let payload: Option<String> = self
            .connection
            .query_row(
                "SELECT payload FROM location_scores WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };
        match serde_json::from_str(&payload) {
            Ok(entry) => Ok(Some(entry)),
            Err(err) => {
                log::warn!("discarding undecodable snapshot for {key}: {err}");
                Ok(None)
            }
        }
    }

    fn insert(&mut self, key: &str, entry: CachedLocation) -> Result<(), Self::Error> {
        let payload =
            serde_json::to_string(&entry).map_err(|source| SqliteScoreStoreError::Encode {
                key: key.to_owned(),
                source,
            })?;
        self.connection.execute(
            "INSERT INTO location_scores (key, payload, last_updated) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                last_updated = excluded.last_updated",
            params![key, payload, entry.last_updated.to_rfc3339()],
        )?;
        Ok(())
    }
}
