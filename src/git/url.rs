//! Remote URL normalization for libgit2
//!
//! `repo.json` carries whatever URL the user pasted. libgit2 is picky about
//! two forms: SCP-style SSH (`git@host:owner/repo.git`) and `file://` URLs
//! without an absolute path. Both are rewritten before any remote is created.

use std::borrow::Cow;
use std::path::Path;

/// True for remotes that live on the local filesystem
pub fn is_local_url(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || Path::new(url).is_absolute()
}

/// Rewrite a remote URL into a form libgit2 accepts
pub fn normalize_remote_url(url: &str) -> Cow<'_, str> {
    if let Some(rewritten) = scp_to_ssh(url) {
        return Cow::Owned(rewritten);
    }
    if let Some(rewritten) = absolute_file_url(url) {
        return Cow::Owned(rewritten);
    }
    Cow::Borrowed(url)
}

/// `git@host:owner/repo.git` -> `ssh://git@host/owner/repo.git`
fn scp_to_ssh(url: &str) -> Option<String> {
    if !url.starts_with("git@") {
        return None;
    }
    let (host, path) = url.split_once(':')?;
    let path = path.strip_prefix('/').unwrap_or(path);
    Some(format!("ssh://{host}/{path}"))
}

/// `file://relative` or `file://C:\dir` -> `file:///...`
#[cfg(not(windows))]
fn absolute_file_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("file://")?;
    if rest.contains('\\') {
        return Some(format!("file:///{}", rest.replace('\\', "/")));
    }
    if rest.is_empty() || rest.starts_with('/') {
        return None;
    }
    Some(format!("file:///{rest}"))
}

#[cfg(windows)]
fn absolute_file_url(_url: &str) -> Option<String> {
    None
}
