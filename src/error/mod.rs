//! Error types and handling for freshstart
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors are grouped by the part of the update cycle that raises them:
//! - repository access and synchronization (git)
//! - package installation (pip)
//! - configuration, marker and launch (local I/O)
//!
//! Staleness-check failures (`Network`, `RepoAccess`) never abort a launch;
//! the cycle downgrades them to "stale". Everything else is fatal for the
//! current launch and is printed with its diagnostic.


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for freshstart operations
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Repository errors
    #[error("Cannot reach remote '{url}': {reason}")]
    #[diagnostic(
        code(freshstart::git::network),
        help("Check your network connection and that the repository URL is correct")
    )]
    Network { url: String, reason: String },

    #[error("Cannot read local repository at '{path}': {reason}")]
    #[diagnostic(code(freshstart::git::repo_access))]
    RepoAccess { path: String, reason: String },

    #[error("Failed to synchronize with '{url}': {reason}")]
    #[diagnostic(
        code(freshstart::git::sync_failed),
        help("The next launch will retry the full update")
    )]
    Sync { url: String, reason: String },

    // Install errors
    #[error("An error occurred while installing package '{target}':\n{stderr}")]
    #[diagnostic(
        code(freshstart::install::failed),
        help("The next launch will retry the full update")
    )]
    Install { target: String, stderr: String },

    #[error("Failed to prepare virtual environment: {reason}")]
    #[diagnostic(code(freshstart::install::venv_failed))]
    Venv { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(freshstart::config::not_found),
        help("Create a repo.json with repo_url, repo_dir and startup_script")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(freshstart::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Local state errors
    #[error("Failed to update install marker {path}: {reason}")]
    #[diagnostic(code(freshstart::marker::io))]
    Marker { path: String, reason: String },

    #[error("Failed to start '{script}': {reason}")]
    #[diagnostic(code(freshstart::launch::failed))]
    Launch { script: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(freshstart::fs::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LauncherError>;
