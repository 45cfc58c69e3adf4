//! Commit references for staleness checks
//!
//! Local HEAD is read from the working copy; remote HEAD is read from the
//! remote's advertised refs without fetching any objects.

use std::fmt;
use std::path::Path;

use git2::{Direction, Oid, Repository};

use super::auth::remote_callbacks;
use super::error::interpret_git_error;
use super::url::normalize_remote_url;
use crate::error::{LauncherError, Result};

/// Opaque identifier of a repository state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitRef(Oid);

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn repo_access(path: &Path, err: &git2::Error) -> LauncherError {
    LauncherError::RepoAccess {
        path: path.display().to_string(),
        reason: err.message().to_string(),
    }
}

/// Open the working copy at `path`
pub fn open(path: &Path) -> Result<Repository> {
    Repository::open(path).map_err(|e| repo_access(path, &e))
}

/// Commit currently checked out in the working copy
pub fn local_head(repo: &Repository) -> Result<CommitRef> {
    let path = repo.workdir().unwrap_or_else(|| repo.path());
    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|e| repo_access(path, &e))?;
    Ok(CommitRef(commit.id()))
}

/// Commit the remote advertises as HEAD
///
/// Uses an in-memory remote on `repo` so the working copy's own remote
/// configuration is never modified.
pub fn remote_head(repo: &Repository, url: &str) -> Result<CommitRef> {
    let network = |reason: String| LauncherError::Network {
        url: url.to_string(),
        reason,
    };

    let mut remote = repo
        .remote_anonymous(&normalize_remote_url(url))
        .map_err(|e| network(interpret_git_error(&e)))?;
    let connection = remote
        .connect_auth(Direction::Fetch, Some(remote_callbacks()), None)
        .map_err(|e| network(interpret_git_error(&e)))?;
    let heads = connection
        .list()
        .map_err(|e| network(interpret_git_error(&e)))?;

    heads
        .iter()
        .find(|head| head.name() == "HEAD")
        .map(|head| CommitRef(head.oid()))
        .ok_or_else(|| network("remote does not advertise HEAD".to_string()))
}
