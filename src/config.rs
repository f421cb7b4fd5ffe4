//! Configuration handling for the migration runner
//!
//! Configuration comes from an optional TOML file plus environment
//! variables; the environment always wins.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Names an optional TOML config file.
pub const CONFIG_ENV: &str = "MIGRATE_CONFIG";
/// Connection string for the target database.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Overrides the migration script path.
pub const SCRIPT_ENV: &str = "MIGRATION_FILE";

const DEFAULT_SCRIPT: &str = "migrations/add_search_vector.sql";

/// Load configuration from a TOML file
pub fn load_from_file(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file {}: {}", path, e)))?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::Config(format!("Failed to parse config file {}: {}", path, e)))?;

    Ok(config)
}

/// Represents the complete runner configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Resolve configuration from the environment.
    ///
    /// Reads the file named by `MIGRATE_CONFIG` if set, then applies
    /// `DATABASE_URL` and `MIGRATION_FILE` overrides. A database URL must
    /// come from one of the two sources.
    pub fn load() -> Result<Config> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => load_from_file(&path)?,
            Err(_) => Config::default(),
        };

        if let Ok(url) = env::var(DATABASE_URL_ENV) {
            config.database.url = Some(url);
        }

        if let Ok(script) = env::var(SCRIPT_ENV) {
            config.migration.script = PathBuf::from(script);
        }

        if config.database.url.is_none() {
            return Err(Error::Config(format!(
                "no database URL configured: set {} or supply a config file via {}",
                DATABASE_URL_ENV, CONFIG_ENV
            )));
        }

        Ok(config)
    }
}

/// Database connection configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub pool_size: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Migration script configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MigrationConfig {
    pub script: PathBuf,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub stdout: bool,
}
