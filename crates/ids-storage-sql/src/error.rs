//! SQL storage error mapping.

use ids_storage::StorageError;
use sqlx::Error as SqlxError;

/// Converts a `SQLx` error into a storage error.
///
/// Unique-constraint violations (`PostgreSQL` error code 23505) become
/// `StorageError::Duplicate` for the given entity type; pool and I/O
/// failures become `StorageError::Connection`.
#[allow(clippy::needless_pass_by_value)]
pub fn from_sqlx_error(entity_type: &'static str, err: SqlxError) -> StorageError {
    match err {
        SqlxError::Database(db_err) => {
            if db_err.code().is_some_and(|c| c == "23505") {
                StorageError::duplicate(entity_type, db_err.message().to_string())
            } else {
                StorageError::Query(db_err.to_string())
            }
        }
        SqlxError::PoolTimedOut => StorageError::Connection("connection pool timeout".to_string()),
        SqlxError::PoolClosed => StorageError::Connection("connection pool closed".to_string()),
        SqlxError::Io(io_err) => StorageError::Connection(io_err.to_string()),
        _ => StorageError::Internal(err.to_string()),
    }
}
