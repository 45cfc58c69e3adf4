//! Requirement resolution
//!
//! Turns the requirement files of a checkout into an ordered install plan:
//! - `requirements-torch.txt`, when present, becomes a single file entry
//!   flagged as a bulk dependency and goes first
//! - `requirements.txt` contributes one package entry per non-empty line,
//!   after cutting `#` comments and surrounding whitespace
//!
//! Missing or unreadable files contribute nothing; resolution never fails.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Primary requirement file
pub const PRIMARY_FILE: &str = "requirements.txt";

/// Optional heavy dependency set, installed first
pub const BULK_FILE: &str = "requirements-torch.txt";

/// What a plan entry installs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// A single package specifier (`requests>=2`)
    Package(String),
    /// A nested requirement file (`pip install -r <path>`)
    File(PathBuf),
}

/// One step of an install plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEntry {
    pub requirement: Requirement,
    /// Only selects user-facing wording
    pub is_bulk_dependency: bool,
}

impl RequirementEntry {
    pub fn package(spec: impl Into<String>) -> Self {
        Self {
            requirement: Requirement::Package(spec.into()),
            is_bulk_dependency: false,
        }
    }

    pub fn bulk_file(path: impl Into<PathBuf>) -> Self {
        Self {
            requirement: Requirement::File(path.into()),
            is_bulk_dependency: true,
        }
    }

    /// Arguments handed to `pip install --upgrade`
    pub fn pip_args(&self) -> Vec<String> {
        match &self.requirement {
            Requirement::Package(spec) => vec![spec.clone()],
            Requirement::File(path) => vec!["-r".to_string(), path.display().to_string()],
        }
    }

    /// Package or file name used in error reports
    pub fn target(&self) -> String {
        match &self.requirement {
            Requirement::Package(spec) => spec.clone(),
            Requirement::File(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for RequirementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requirement {
            Requirement::Package(spec) => write!(f, "{spec}"),
            Requirement::File(path) => write!(f, "-r {}", path.display()),
        }
    }
}

/// Ordered install plan
pub type InstallPlan = Vec<RequirementEntry>;

/// Strip comments and whitespace from requirement file contents
pub fn parse_requirements(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(before, _)| before).trim())
        .filter(|line| !line.is_empty())
}

/// Build the install plan for the checkout at `local_path`
pub fn resolve(local_path: &Path) -> InstallPlan {
    let mut plan = InstallPlan::new();

    let bulk = local_path.join(BULK_FILE);
    if bulk.is_file() {
        plan.push(RequirementEntry::bulk_file(bulk));
    }

    let primary = local_path.join(PRIMARY_FILE);
    if primary.is_file() {
        match fs::read_to_string(&primary) {
            Ok(contents) => plan.extend(parse_requirements(&contents).map(RequirementEntry::package)),
            Err(e) => {
                tracing::warn!(path = %primary.display(), error = %e, "cannot read requirement file, skipping");
            }
        }
    }

    tracing::debug!(entries = plan.len(), "resolved install plan");
    plan
}
