//! Database connection handling
//!
//! This module establishes the Postgres connection pool the runner works
//! through. The pool is sized for a single exclusively-owned connection;
//! the runner never holds more than one session at a time.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};

/// A live connection pool against the target database
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new connection pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| Error::Config("database URL is not set".to_string()))?;

        let pool_size = config.pool_size.unwrap_or(1);
        let timeout_seconds = config.timeout_seconds.unwrap_or(30);

        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(Duration::from_secs(timeout_seconds))
            .connect(url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Access the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Tear the pool down after the run completes
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
