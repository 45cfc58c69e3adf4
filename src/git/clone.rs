//! Repository cloning
//!
//! Full (non-shallow) clones so later fast-forwards always have the history
//! they need.

use std::path::Path;

use git2::{FetchOptions, Repository, build::RepoBuilder};

use super::auth::remote_callbacks;
use super::error::interpret_git_error;
use super::url::{is_local_url, normalize_remote_url};
use crate::error::{LauncherError, Result};

/// Clone `url` into `target`, which must not exist yet
pub fn clone(url: &str, target: &Path) -> Result<Repository> {
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks());

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let normalized = normalize_remote_url(url);
    tracing::debug!(
        url = %normalized,
        local = is_local_url(url),
        target = %target.display(),
        "cloning repository"
    );

    builder
        .clone(normalized.as_ref(), target)
        .map_err(|e| LauncherError::Sync {
            url: url.to_string(),
            reason: format!("clone failed: {}", interpret_git_error(&e)),
        })
}
