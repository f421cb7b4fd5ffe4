//! Logging setup for the migration runner

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
///
/// Without a `[logging]` section the runner logs human-readable text at
/// `info` to stdout; `RUST_LOG` directives still apply on top.
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let (level, json) = match config {
        Some(cfg) => (
            parse_level(&cfg.level),
            cfg.format.eq_ignore_ascii_case("json"),
        ),
        None => (Level::INFO, false),
    };

    let env_filter = EnvFilter::from_default_env().add_directive(
        format!("coachranger_migrate={}", level)
            .parse()
            .map_err(|e: tracing_subscriber::filter::ParseError| {
                Error::Config(e.to_string())
            })?,
    );

    if json {
        let subscriber = fmt::Subscriber::builder()
            .json()
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| Error::Config(e.to_string()))?;
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| Error::Config(e.to_string()))?;
    }

    Ok(())
}

/// Parse a log level string, defaulting to `info`
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
