//! Transactional application of the migration script
//!
//! The whole script text runs as a single statement batch inside one
//! transaction: either every statement applies or none do.

use crate::db::connection::Database;
use crate::error::{Error, Result};

/// Apply the script text as one all-or-nothing batch.
///
/// The `Transaction` guard rolls back on drop, so every error path leaves
/// the schema untouched and returns the checked-out connection to the pool.
pub async fn apply(db: &Database, sql: &str) -> Result<()> {
    let mut tx = db
        .pool()
        .begin()
        .await
        .map_err(|e| Error::Connection(e.to_string()))?;

    tracing::info!("applying migration");

    sqlx::raw_sql(sql)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::Query(e.to_string()))?;

    tx.commit().await.map_err(|e| Error::Query(e.to_string()))?;

    tracing::info!("migration committed");
    Ok(())
}
