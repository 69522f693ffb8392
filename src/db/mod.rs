pub mod tables;

use bincode::error::{DecodeError, EncodeError};
use redb::{Database, Error as RedbError, ReadableTable, ReadableTableMetadata};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// Database handle type (Arc-wrapped for sharing across handlers)
pub type Db = Arc<Database>;

const BINCODE_CONFIG: bincode::config::Configuration = bincode::config::standard();

/// Open or create the redb database at the given path
///
/// Creates all required tables on first run. The returned handle owns the
/// database file; it is closed when the last clone is dropped.
#[allow(clippy::result_large_err)]
pub fn open_database(path: impl AsRef<Path>) -> std::result::Result<Db, RedbError> {
    tracing::info!("Opening database at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                RedbError::Io(e)
            })?;
        }
    }

    let db = Database::create(path)?;

    // Initialize tables on first run
    let write_txn = db.begin_write()?;
    {
        // Create tables if they don't exist by opening them
        let _ = write_txn.open_table(tables::USERS)?;
        let _ = write_txn.open_table(tables::EXERCISES)?;
        let _ = write_txn.open_table(tables::USER_EXERCISES)?;
    }
    write_txn.commit()?;

    tracing::info!("Database initialized successfully");

    Ok(Arc::new(db))
}

/// Serialize a record for storage
pub fn encode<T: Serialize>(value: &T) -> std::result::Result<Vec<u8>, EncodeError> {
    bincode::serde::encode_to_vec(value, BINCODE_CONFIG)
}

/// Deserialize a stored record
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> std::result::Result<T, DecodeError> {
    bincode::serde::decode_from_slice(bytes, BINCODE_CONFIG).map(|(value, _)| value)
}

/// Fetch and decode a single record by key
pub fn get_record<T: DeserializeOwned>(
    table: &impl ReadableTable<&'static str, &'static [u8]>,
    key: &str,
) -> Result<Option<T>> {
    match table.get(key)? {
        Some(bytes) => Ok(Some(decode(bytes.value())?)),
        None => Ok(None),
    }
}

/// Number of stored users and exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub users: u64,
    pub exercises: u64,
}

/// Count stored records in a read transaction
///
/// Succeeds only if the database can be read, so it doubles as a liveness check.
pub fn record_counts(db: &Database) -> Result<RecordCounts> {
    let read_txn = db.begin_read()?;
    let users = read_txn.open_table(tables::USERS)?.len()?;
    let exercises = read_txn.open_table(tables::EXERCISES)?.len()?;

    Ok(RecordCounts { users, exercises })
}
