//! Error types for the migration runner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for migration runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the migration runner
///
/// Every variant is fatal to the run; nothing is retried. `main` maps any
/// error to a non-zero exit status.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Migration script not found or unreadable: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),
}

// sqlx errors are classified at the call site (Connection vs Query), so there
// is deliberately no blanket From<sqlx::Error> here.

/// Convert TOML deserialization errors to configuration errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Config(error.to_string())
    }
}
