//! Common test utilities for freshstart integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

/// A launcher working directory with an upstream repository next to it
pub struct TestLauncher {
    /// Temporary directory
    pub temp: TempDir,
    /// Launcher working directory (config, marker, logs)
    pub path: PathBuf,
    /// Upstream repository the config points at
    pub upstream: Repository,
}

impl TestLauncher {
    /// Create a working directory and an empty upstream repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("launcher");
        std::fs::create_dir_all(&path).expect("Failed to create launcher directory");
        let upstream =
            Repository::init(temp.path().join("upstream")).expect("Failed to init upstream");
        Self {
            temp,
            path,
            upstream,
        }
    }

    pub fn upstream_url(&self) -> String {
        self.temp
            .path()
            .join("upstream")
            .to_string_lossy()
            .into_owned()
    }

    /// Write `repo.json` for a checkout in `app/` run by `python`
    pub fn write_config(&self, python: &str, startup_script: &str) {
        let config = serde_json::json!({
            "repo_url": self.upstream_url(),
            "repo_dir": "app",
            "startup_script": startup_script,
            "python": python,
        });
        self.write_file("repo.json", &config.to_string());
    }

    /// Commit `name` with `content` on the upstream HEAD
    pub fn commit(&self, name: &str, content: &str) {
        let workdir = self.upstream.workdir().expect("non-bare repository");
        std::fs::write(workdir.join(name), content).expect("Failed to write file");

        let mut index = self.upstream.index().expect("index");
        index.add_path(Path::new(name)).expect("add path");
        index.write().expect("write index");
        let tree = self
            .upstream
            .find_tree(index.write_tree().expect("write tree"))
            .expect("tree");

        let sig = Signature::now("Test", "test@test.com").expect("signature");
        let parent = self
            .upstream
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();
        self.upstream
            .commit(Some("HEAD"), &sig, &sig, &format!("update {name}"), &tree, &parents)
            .expect("commit");
    }

    /// Write a file in the working directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the working directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the working directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn freshstart_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("freshstart").expect("binary");
    cmd.env_remove("FRESHSTART_CONFIG")
        .env_remove("FRESHSTART_WORKDIR")
        .env_remove("FRESHSTART_LOG");
    cmd
}
