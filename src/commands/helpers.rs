//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_CONFIG_FILE, LauncherConfig};
use crate::error::{LauncherError, Result};

/// Resolve the launcher working directory from the optional argument
///
/// If a directory is provided, use it. Otherwise, resolve to the current
/// directory. The result is always absolute: the application is started
/// from inside `repo_dir`, where relative paths no longer resolve.
pub fn resolve_work_dir(workdir: Option<PathBuf>) -> Result<PathBuf> {
    let path = workdir.unwrap_or_default();
    std::path::absolute(&path).map_err(|e| LauncherError::Io {
        message: format!("Failed to resolve working directory '{}': {e}", path.display()),
    })
}

/// Everything a command needs about where it runs
#[derive(Debug, Clone)]
pub struct Context {
    pub work_dir: PathBuf,
    pub config: LauncherConfig,
}

impl Context {
    /// Load the configuration; a relative `config_path` is taken from `work_dir`
    pub fn load(work_dir: PathBuf, config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => work_dir.join(path),
            None => work_dir.join(DEFAULT_CONFIG_FILE),
        };

        let config = LauncherConfig::load(&config_path)?.resolved_against(&work_dir);
        tracing::debug!(config = %config_path.display(), repo = %config.repo_url, "configuration loaded");
        if let Some(icon) = &config.icon {
            tracing::debug!(icon = %icon.display(), "icon configured");
        }

        Ok(Self { work_dir, config })
    }
}
