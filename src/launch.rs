//! Starting the target application

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::error::{LauncherError, Result};
use crate::process::ProcessSpec;

/// Directory (under the working directory) for launcher and app logs
pub const LOG_DIR: &str = "logs";

/// Receives the application's stderr, one header per run
pub const CRASH_LOG_FILE: &str = "app_crash.log";

/// Runs the startup script with the resolved interpreter
#[derive(Debug, Clone)]
pub struct AppLauncher {
    python: PathBuf,
    repo_dir: PathBuf,
    script: PathBuf,
    log_dir: PathBuf,
}

impl AppLauncher {
    pub fn new(python: PathBuf, repo_dir: PathBuf, script: PathBuf, log_dir: PathBuf) -> Self {
        Self {
            python,
            repo_dir,
            script,
            log_dir,
        }
    }

    pub fn script_path(&self) -> PathBuf {
        self.repo_dir.join(&self.script)
    }

    pub fn crash_log_path(&self) -> PathBuf {
        self.log_dir.join(CRASH_LOG_FILE)
    }

    /// Run the application to completion and return its exit code.
    ///
    /// A missing startup script is not an error: there is nothing to run
    /// and the launcher exits cleanly.
    pub fn launch(&self) -> Result<i32> {
        let script = self.script_path();
        if !script.is_file() {
            tracing::warn!(script = %script.display(), "startup script not found, nothing to launch");
            return Ok(0);
        }

        let crash_log = self.open_crash_log().map_err(|e| self.error(&e.to_string()))?;
        let spec = ProcessSpec::new(self.python.as_os_str())
            .arg(self.script.as_os_str())
            .current_dir(&self.repo_dir);

        tracing::info!(command = %spec.display(), "starting application");
        let status = spec
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::from(crash_log))
            .status()
            .map_err(|e| self.error(&e.to_string()))?;

        // Killed by a signal: no code, report failure.
        let code = status.code().unwrap_or(1);
        if status.success() {
            tracing::info!("application exited");
        } else {
            tracing::warn!(code, log = %self.crash_log_path().display(), "application exited with an error");
        }
        Ok(code)
    }

    fn open_crash_log(&self) -> std::io::Result<File> {
        fs::create_dir_all(&self.log_dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.crash_log_path())?;
        writeln!(
            file,
            "Logging stderr for run at datetime: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        Ok(file)
    }

    fn error(&self, reason: &str) -> LauncherError {
        LauncherError::Launch {
            script: self.script_path().display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Log directory for a launcher working directory
pub fn log_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(LOG_DIR)
}
