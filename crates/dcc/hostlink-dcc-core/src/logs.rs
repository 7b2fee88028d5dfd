//! Log directory plumbing.
//!
//! Tool logs land in a fixed directory under the user's home
//! (`~/hostlink/logs`) unless the embedder's setup overrides it. Library
//! code itself logs through the `log` facade; installing a logger
//! implementation is the embedder's call.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::config::HostSetup;

/// Default log directory under the user's home, `None` when the platform
/// reports no home directory.
pub fn default_log_directory() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("hostlink").join("logs"))
}

/// Log directory this setup resolves to, without touching the filesystem.
pub fn resolve_log_directory(setup: &HostSetup) -> Result<PathBuf> {
    if let Some(dir) = &setup.log_directory {
        return Ok(dir.clone());
    }
    default_log_directory().ok_or_else(|| anyhow!("no home directory to place logs under"))
}

/// Resolve and create the log directory.
pub fn ensure_log_directory(setup: &HostSetup) -> Result<PathBuf> {
    let dir = resolve_log_directory(setup)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    debug!("log directory ready at {}", dir.display());
    Ok(dir)
}
