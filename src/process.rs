//! Process execution
//!
//! Subprocesses are run through [`ProcessRunner`] so callers get a structured
//! result (exit status and captured stderr) instead of raw platform errors,
//! and so tests can substitute a scripted runner.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl ProcessSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Human-readable command line for logs
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

/// Outcome of a finished (or unstartable) process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when killed by a signal or never started
    pub code: Option<i32>,
    pub success: bool,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn succeeded() -> Self {
        Self {
            code: Some(0),
            success: true,
            stderr: String::new(),
        }
    }

    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            stderr: stderr.into(),
        }
    }
}

/// Runs a process to completion, capturing stderr
pub trait ProcessRunner: Send + Sync {
    fn run(&self, spec: &ProcessSpec) -> ProcessOutput;
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &ProcessSpec) -> ProcessOutput {
        tracing::debug!(command = %spec.display(), "running");

        let output = spec
            .command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) => ProcessOutput {
                code: output.status.code(),
                success: output.status.success(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            },
            Err(e) => ProcessOutput::failed(
                None,
                format!("failed to start {}: {e}", spec.program.to_string_lossy()),
            ),
        }
    }
}
