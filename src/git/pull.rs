//! Fetch and fast-forward an existing working copy
//!
//! Equivalent of `git pull --ff-only <url> HEAD`: the remote HEAD is fetched
//! into FETCH_HEAD and the current branch (or detached HEAD) is moved onto it.
//! A diverged history is refused.

use std::path::Path;

use git2::{AnnotatedCommit, FetchOptions, Oid, Repository, build::CheckoutBuilder};

use super::auth::remote_callbacks;
use super::error::interpret_git_error;
use super::url::normalize_remote_url;
use crate::error::{LauncherError, Result};

const REFLOG_MESSAGE: &str = "freshstart: fast-forward";

/// Pull the remote HEAD of `url` into the working copy at `path`
pub fn pull(path: &Path, url: &str) -> Result<()> {
    let sync_failed = |reason: String| LauncherError::Sync {
        url: url.to_string(),
        reason,
    };

    let repo = Repository::open(path)
        .map_err(|e| sync_failed(format!("cannot open {}: {}", path.display(), e.message())))?;

    let fetched = fetch_head(&repo, url).map_err(|e| sync_failed(interpret_git_error(&e)))?;
    let (analysis, _) = repo
        .merge_analysis(&[&fetched])
        .map_err(|e| sync_failed(e.message().to_string()))?;

    if analysis.is_up_to_date() {
        tracing::debug!("working copy already up to date");
        return Ok(());
    }

    if !(analysis.is_fast_forward() || analysis.is_unborn()) {
        return Err(sync_failed(
            "local history has diverged from the remote; refusing to merge".to_string(),
        ));
    }

    fast_forward(&repo, fetched.id()).map_err(|e| sync_failed(e.message().to_string()))?;
    tracing::info!(commit = %fetched.id(), "fast-forwarded working copy");
    Ok(())
}

fn fetch_head<'r>(repo: &'r Repository, url: &str) -> std::result::Result<AnnotatedCommit<'r>, git2::Error> {
    let mut remote = repo.remote_anonymous(&normalize_remote_url(url))?;
    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(remote_callbacks());
    remote.fetch(&["HEAD"], Some(&mut fetch_options), None)?;

    let fetch_head = repo.find_reference("FETCH_HEAD")?;
    repo.reference_to_annotated_commit(&fetch_head)
}

fn fast_forward(repo: &Repository, target: Oid) -> std::result::Result<(), git2::Error> {
    match repo.head() {
        Ok(mut head) if head.is_branch() => {
            head.set_target(target, REFLOG_MESSAGE)?;
        }
        Ok(_) => repo.set_head_detached(target)?,
        Err(_) => {
            // Unborn branch: create the ref HEAD points at.
            let head = repo.find_reference("HEAD")?;
            let branch = head.symbolic_target().unwrap_or("refs/heads/main").to_string();
            repo.reference(&branch, target, true, REFLOG_MESSAGE)?;
        }
    }

    let mut checkout = CheckoutBuilder::new();
    checkout.force();
    repo.checkout_head(Some(&mut checkout))
}
