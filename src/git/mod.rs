//! Git operations for keeping the application checkout current
//!
//! This module handles:
//! - Cloning the application repository
//! - Reading local and remote HEAD for staleness checks
//! - Fetching and fast-forwarding an existing checkout
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/ and the SSH agent
//! - Git credential helpers
//! - Environment variables (`GIT_SSH_COMMAND`, etc.)

mod auth;
mod clone;
mod error;
mod pull;
mod refs;
mod url;

pub use clone::clone;
pub use pull::pull;
pub use refs::{local_head, open, remote_head};

#[cfg(test)]
pub(crate) use url::is_local_url;
