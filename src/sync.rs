//! Repository synchronization
//!
//! [`RepositorySyncer`] is the seam between the update cycle and git; the
//! cycle only needs "is the checkout current?" and "make it current".

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::git;

/// Keeps a local working copy in step with its remote
pub trait RepositorySyncer: Send + Sync {
    /// Whether the local HEAD equals the remote HEAD.
    ///
    /// Fails with `RepoAccess` for a missing or corrupt checkout and with
    /// `Network` when the remote cannot be reached. Callers treat any error
    /// as "not current".
    fn is_current(&self, local_path: &Path, remote_url: &str) -> Result<bool>;

    /// Clone when `local_path` is absent, otherwise fast-forward it.
    /// Fails with `Sync`; never retried.
    fn sync(&self, remote_url: &str, local_path: &Path) -> Result<()>;
}

/// [`RepositorySyncer`] backed by libgit2
#[derive(Debug, Default, Clone, Copy)]
pub struct GitSyncer;

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

impl RepositorySyncer for GitSyncer {
    fn is_current(&self, local_path: &Path, remote_url: &str) -> Result<bool> {
        let repo = git::open(local_path)?;
        let local = git::local_head(&repo)?;
        let remote = git::remote_head(&repo, remote_url)?;
        tracing::debug!(%local, %remote, "compared heads");
        Ok(local == remote)
    }

    fn sync(&self, remote_url: &str, local_path: &Path) -> Result<()> {
        if !local_path.exists() || is_empty_dir(local_path) {
            tracing::info!(url = remote_url, path = %local_path.display(), "cloning");
            git::clone(remote_url, local_path)?;
        } else {
            tracing::info!(url = remote_url, path = %local_path.display(), "pulling");
            git::pull(local_path, remote_url)?;
        }
        Ok(())
    }
}
