//! SQLite connection pool setup for the scan history database.
//!
//! History lives in a single SQLite file. The pool is opened with WAL
//! journaling so history reads don't block the scan loop's writes.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::sync::Arc;

use log::{error, info};
use sqlx::{Pool, Sqlite, SqlitePool};

use crate::error_handling::DatabaseError;

/// Shared handle to the SQLite pool.
pub type DbPool = Arc<Pool<Sqlite>>;

/// Opens the history database at `db_path`, creating the file on first use,
/// and returns a shared connection pool with WAL mode enabled.
pub async fn init_db_pool_with_path(db_path: &std::path::Path) -> Result<DbPool, DatabaseError> {
    let db_path_str = db_path.to_string_lossy().to_string();
    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(&db_path_str)
    {
        Ok(_) => info!("Created history database file."),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("Reusing existing history database file.")
        }
        Err(e) => {
            error!("Could not create history database file: {e}");
            return Err(DatabaseError::FileCreationError(e.to_string()));
        }
    }

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path_str))
        .await
        .map_err(|e| {
            error!("Could not connect to history database: {e}");
            DatabaseError::SqlError(e)
        })?;

    // WAL mode: readers and the writer don't block each other.
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await
        .map_err(|e| {
            error!("Could not enable WAL mode: {e}");
            DatabaseError::SqlError(e)
        })?;

    Ok(Arc::new(pool))
}
