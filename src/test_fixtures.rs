//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_remote, commit_file};
//!
//! #[test]
//! fn my_test() {
//!     // Upstream repository with an initial commit, served by path
//!     let fixture = create_remote();
//!     let checkout = fixture.root().join("checkout");
//!
//!     // Advance upstream by one commit
//!     let oid = commit_file(fixture.upstream(), "main.py", "print('v2')\n");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// An upstream repository living next to a scratch area for checkouts
pub struct RemoteFixture {
    temp: TempDir,
    upstream: Repository,
}

impl RemoteFixture {
    /// Scratch directory; checkouts and markers go here
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn upstream(&self) -> &Repository {
        &self.upstream
    }

    /// URL the launcher would find in `repo.json`
    pub fn url(&self) -> String {
        self.temp.path().join("upstream").to_string_lossy().into_owned()
    }
}

/// Write `name` in the repository's workdir and commit it on HEAD.
///
/// # Panics
///
/// Panics if any git step fails.
pub fn commit_file(repo: &Repository, name: &str, content: &str) -> Oid {
    let workdir = repo.workdir().expect("non-bare repository");
    let path = workdir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(name)).expect("add path");
    index.write().expect("write index");
    let tree = repo.find_tree(index.write_tree().expect("write tree")).expect("tree");

    let sig = Signature::now("Test", "test@test.com").expect("signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<_> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, &format!("update {name}"), &tree, &parents)
        .expect("commit")
}

/// Create an upstream repository with `requirements.txt` and `main.py`.
///
/// # Panics
///
/// Panics if the temp directory or git repository cannot be created.
#[must_use]
pub fn create_remote() -> RemoteFixture {
    let temp = create_temp_dir();
    let upstream_path: PathBuf = temp.path().join("upstream");
    let upstream = Repository::init(&upstream_path).expect("Failed to init git repository");
    commit_file(&upstream, "requirements.txt", "requests\n");
    commit_file(&upstream, "main.py", "print('v1')\n");
    RemoteFixture { temp, upstream }
}

/// Process runner that records every command and fails on chosen arguments
#[derive(Default)]
pub struct ScriptedRunner {
    fail_on: Vec<(String, String)>,
    calls: std::sync::Mutex<Vec<crate::process::ProcessSpec>>,
}

impl ScriptedRunner {
    /// Fail any command that has `arg` among its arguments, reporting `stderr`
    #[must_use]
    pub fn failing_on(mut self, arg: &str, stderr: &str) -> Self {
        self.fail_on.push((arg.to_string(), stderr.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<crate::process::ProcessSpec> {
        self.calls.lock().expect("lock").clone()
    }
}

impl crate::process::ProcessRunner for ScriptedRunner {
    fn run(&self, spec: &crate::process::ProcessSpec) -> crate::process::ProcessOutput {
        self.calls.lock().expect("lock").push(spec.clone());
        let failure = self
            .fail_on
            .iter()
            .find(|(arg, _)| spec.args.iter().any(|a| a.to_string_lossy() == arg.as_str()));
        match failure {
            Some((_, stderr)) => crate::process::ProcessOutput::failed(Some(1), stderr.clone()),
            None => crate::process::ProcessOutput::succeeded(),
        }
    }
}

/// Notifier that keeps every event for later inspection
#[derive(Default)]
pub struct RecordingNotifier {
    events: std::sync::Mutex<Vec<crate::events::InstallEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<crate::events::InstallEvent> {
        self.events.lock().expect("lock").clone()
    }

    pub fn progress(&self) -> Vec<crate::events::ProgressEvent> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                crate::events::InstallEvent::Progress(progress) => Some(progress),
                _ => None,
            })
            .collect()
    }
}

impl crate::events::Notifier for RecordingNotifier {
    fn notify(&self, event: crate::events::InstallEvent) {
        self.events.lock().expect("lock").push(event);
    }
}
