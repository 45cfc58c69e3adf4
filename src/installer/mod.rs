//! Package installation for the application checkout
//!
//! This module handles:
//! - Running `pip install --upgrade` for every entry of an install plan
//! - Reporting label switches and progress through a [`Notifier`]
//! - Locating (and creating) the interpreter that pip runs under
//!
//! Entries are installed strictly one after another: pip keeps shared state
//! in site-packages, and the first failing entry must be unambiguous. The
//! first failure stops the run; nothing is rolled back.

mod python;


use std::path::PathBuf;

use crate::error::{LauncherError, Result};
use crate::events::{InstallEvent, Notifier, ProgressEvent};
use crate::process::{ProcessRunner, ProcessSpec};
use crate::requirements::RequirementEntry;

pub use python::{reset_venv, resolve_interpreter};

/// Installs requirement entries with pip
pub struct PackageInstaller<'a> {
    runner: &'a dyn ProcessRunner,
    python: PathBuf,
    extra_args: Vec<String>,
}

impl<'a> PackageInstaller<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, python: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            python: python.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments appended to every pip invocation
    #[must_use]
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// The pip command for one entry
    pub fn pip_command(&self, entry: &RequirementEntry) -> ProcessSpec {
        ProcessSpec::new(self.python.as_os_str())
            .args(["-m", "pip", "install", "--upgrade"])
            .args(entry.pip_args())
            .args(&self.extra_args)
    }

    /// Install every entry of `plan` in order, stopping at the first failure
    pub fn install(&self, plan: &[RequirementEntry], notifier: &dyn Notifier) -> Result<()> {
        let total = plan.len();

        for (index, entry) in plan.iter().enumerate() {
            notifier.notify(InstallEvent::Step {
                is_bulk_dependency: entry.is_bulk_dependency,
            });

            tracing::info!(package = %entry, step = index + 1, total, "installing");
            let output = self.runner.run(&self.pip_command(entry));

            if !output.success {
                tracing::error!(
                    package = %entry,
                    code = ?output.code,
                    "install failed, aborting remaining {} entries",
                    total - index - 1
                );
                return Err(LauncherError::Install {
                    target: entry.target(),
                    stderr: output.stderr,
                });
            }

            notifier.notify(InstallEvent::Progress(ProgressEvent {
                completed: index + 1,
                total,
                is_bulk_dependency: entry.is_bulk_dependency,
            }));
        }

        Ok(())
    }
}
