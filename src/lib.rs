//! Transactional migration runner for the CoachRanger listings database.
//!
//! Reads a SQL script from disk and applies its full text atomically
//! against a configured Postgres database: one transaction, one commit on
//! success, rollback on any failure. The shipped script adds a full-text
//! `search_vector` column to the `listings` table.

pub mod config;
pub mod db;
pub mod error;
pub mod script;
pub mod utils;

#[cfg(test)]
mod test;

// Re-export main types for easier access
pub use config::Config;
pub use db::connection::Database;
pub use error::{Error, Result};

/// The migration runner: loads the script, then applies it in one transaction.
pub struct MigrationRunner {
    config: Config,
}

impl MigrationRunner {
    /// Create a runner from resolved configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the single migration run.
    ///
    /// The script is read before any connection is attempted, so a missing
    /// file never touches the database and a bad connection string never
    /// reads SQL against a session. The pool is torn down on both the
    /// success and failure paths.
    pub async fn run(&self) -> Result<()> {
        let path = script::resolve_script_path(&self.config.migration.script);
        let sql = script::load_script(&path)?;

        tracing::info!(
            path = %path.display(),
            bytes = sql.len(),
            "loaded migration script"
        );

        let database = Database::connect(&self.config.database).await?;
        let outcome = db::runner::apply(&database, &sql).await;
        database.close().await;

        outcome
    }
}
