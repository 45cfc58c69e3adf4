//! Launcher configuration (repo.json)
//!
//! Loaded once at startup. The core only consumes the remote target, the
//! startup script and the interpreter settings; `icon` is carried for the
//! host UI and otherwise ignored.

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LauncherError, Result};

/// Default configuration file name, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "repo.json";

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

/// The repository to keep in sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub url: String,
    pub local_path: PathBuf,
}

/// Launcher configuration (repo.json)
#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    /// Remote to sync
    pub repo_url: String,

    /// Local checkout directory
    pub repo_dir: PathBuf,

    /// Entry point run inside `repo_dir` once the checkout is current
    pub startup_script: PathBuf,

    /// Window icon for hosts that show one
    #[serde(default)]
    pub icon: Option<PathBuf>,

    /// Base interpreter used for pip and, without a venv, for the app itself
    #[serde(default)]
    pub python: Option<String>,

    /// Virtual environment to create (if missing) and run from
    #[serde(default)]
    pub venv_folder: Option<PathBuf>,

    /// Prefer `pythonw.exe` inside the venv (Windows only)
    #[serde(default)]
    pub use_pythonw: bool,

    /// Extra arguments appended to every `pip install`
    #[serde(default)]
    pub pip_args: Vec<String>,

    /// Locale override for user-facing text
    #[serde(default)]
    pub locale: Option<String>,

    /// Translation table (JSON, locale -> source text -> translation)
    #[serde(default)]
    pub translations: Option<PathBuf>,
}

impl LauncherConfig {
    /// Load and parse the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(LauncherError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let json = fs::read_to_string(path).map_err(|e| LauncherError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_json(&json, &path.display().to_string())
    }

    /// Parse configuration from a JSON string; `origin` names it in errors
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            let path = e.path().to_string();
            let reason = if path == "." {
                e.into_inner().to_string()
            } else {
                format!("{path}: {}", e.into_inner())
            };
            LauncherError::ConfigParseFailed {
                path: origin.to_string(),
                reason,
            }
        })
    }

    /// Resolve every relative path against `base` (the working directory)
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

        self.repo_dir = anchor(self.repo_dir);
        self.icon = self.icon.map(anchor);
        self.venv_folder = self.venv_folder.map(anchor);
        self.translations = self.translations.map(anchor);
        self
    }

    pub fn remote_target(&self) -> RemoteTarget {
        RemoteTarget {
            url: self.repo_url.clone(),
            local_path: self.repo_dir.clone(),
        }
    }

    /// Interpreter used to create the venv or, without one, to run everything
    pub fn base_python(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }
}
