//! Locating and loading the migration script
//!
//! The script is treated as an opaque unit of work: no parsing and no
//! statement splitting happens here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve the configured script path.
///
/// Absolute paths are used verbatim. Relative paths are tried next to the
/// running executable first, then fall back to the current working
/// directory.
pub fn resolve_script_path(configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        return configured.to_path_buf();
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(configured);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    configured.to_path_buf()
}

/// Read the script as UTF-8 text.
///
/// Any read failure surfaces as `ScriptNotFound` naming the path that was
/// tried.
pub fn load_script(path: &Path) -> Result<String> {
    let sql = fs::read_to_string(path).map_err(|_| Error::ScriptNotFound(path.to_path_buf()))?;

    if sql.trim().is_empty() {
        tracing::warn!(path = %path.display(), "migration script is empty");
    }

    Ok(sql)
}
