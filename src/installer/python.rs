//! Interpreter discovery
//!
//! Without a `venv_folder` the configured base interpreter is used as is.
//! With one, the venv is created on first use (`<python> -m venv <folder>`)
//! and the interpreter inside it is located by walking the folder, since the
//! layout differs between platforms (`bin/python`, `Scripts/python.exe`).

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::process::{ProcessRunner, ProcessSpec};

fn interpreter_name(use_pythonw: bool) -> &'static str {
    if cfg!(windows) {
        if use_pythonw { "pythonw.exe" } else { "python.exe" }
    } else {
        "python"
    }
}

/// Find the interpreter binary inside an existing venv
fn find_in_venv(venv: &Path, use_pythonw: bool) -> Option<PathBuf> {
    let name = interpreter_name(use_pythonw);

    let conventional = if cfg!(windows) {
        venv.join("Scripts").join(name)
    } else {
        venv.join("bin").join(name)
    };
    if conventional.exists() {
        return Some(conventional);
    }

    WalkDir::new(venv)
        .max_depth(4)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .find(|entry| !entry.file_type().is_dir() && entry.file_name() == name)
        .map(walkdir::DirEntry::into_path)
}

/// Delete the configured venv so the next resolution recreates it.
///
/// Nothing happens without a `venv_folder` or when the folder is absent.
pub fn reset_venv(config: &LauncherConfig) -> Result<()> {
    let Some(venv) = &config.venv_folder else {
        tracing::debug!("no venv configured, nothing to reset");
        return Ok(());
    };
    if !venv.exists() {
        return Ok(());
    }

    tracing::info!(venv = %venv.display(), "removing venv");
    fs::remove_dir_all(venv).map_err(|e| LauncherError::Venv {
        reason: format!("cannot remove {}: {e}", venv.display()),
    })
}

/// Interpreter used for pip and for starting the application
pub fn resolve_interpreter(config: &LauncherConfig, runner: &dyn ProcessRunner) -> Result<PathBuf> {
    let Some(venv) = &config.venv_folder else {
        return Ok(PathBuf::from(config.base_python()));
    };

    if venv.exists() {
        tracing::debug!(venv = %venv.display(), "venv already exists, skipping creation");
    } else {
        tracing::info!(venv = %venv.display(), python = config.base_python(), "creating venv");
        let spec = ProcessSpec::new(config.base_python())
            .args(["-m", "venv"])
            .arg(venv.as_os_str());
        let output = runner.run(&spec);
        if !output.success {
            return Err(LauncherError::Venv {
                reason: if output.stderr.is_empty() {
                    format!("`{}` exited with {:?}", spec.display(), output.code)
                } else {
                    output.stderr
                },
            });
        }
    }

    find_in_venv(venv, config.use_pythonw).ok_or_else(|| LauncherError::Venv {
        reason: format!(
            "no {} found under {}",
            interpreter_name(config.use_pythonw),
            venv.display()
        ),
    })
}
