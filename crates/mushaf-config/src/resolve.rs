//! Path resolution for corpus document paths.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a corpus path written in a config file.
///
/// Handles three cases:
/// - Tilde paths (`~/data/mushaf.json`) - expanded to home directory
/// - Relative paths (`data/mushaf.json`, `../shared/mushaf.json`) - joined onto `config_dir`
/// - Absolute paths - returned as-is
///
/// The file is not required to exist; loading reports a missing document.
pub fn resolve_corpus_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        return Ok(expanded);
    }
    let joined = config_dir.join(&expanded);
    Ok(joined.canonicalize().unwrap_or(joined))
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
