//! Binary entry point: run the configured migration once and exit.

use std::process;

use coachranger_migrate::utils::logging;
use coachranger_migrate::{Config, MigrationRunner};

#[tokio::main]
async fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("failed to initialize logging: {}", e);
        process::exit(1);
    }

    match MigrationRunner::new(config).run().await {
        Ok(()) => {
            tracing::info!("migration applied successfully");
        }
        Err(e) => {
            tracing::error!(error = %e, "migration failed");
            process::exit(1);
        }
    }
}
