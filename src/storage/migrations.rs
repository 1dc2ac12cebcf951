//! Schema migrations for the scan history database.

use sqlx::{Pool, Sqlite};

/// Applies any pending SQL migrations from the crate's `migrations/`
/// directory to the given pool.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let migrator = sqlx::migrate::Migrator::new(dir.as_path()).await?;
    migrator.run(pool).await?;
    Ok(())
}
