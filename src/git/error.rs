//! Git error interpretation
//!
//! Turns raw libgit2 errors into short operator-facing reasons and tells
//! transport failures apart from everything else.

use git2::{Error, ErrorClass, ErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    NotFound,
    Auth,
    PermissionDenied,
    Network,
    Certificate,
    Other,
}

fn classify(err: &Error) -> Failure {
    let msg = err.message().to_lowercase();

    if msg.contains("not found")
        || msg.contains("could not find")
        || msg.contains("404")
        || msg.contains("too many redirects")
        || msg.contains("authentication replays")
    {
        Failure::NotFound
    } else if err.code() == ErrorCode::Auth
        || msg.contains("authentication")
        || msg.contains("credentials")
    {
        Failure::Auth
    } else if msg.contains("permission denied") || msg.contains("access denied") {
        Failure::PermissionDenied
    } else if err.code() == ErrorCode::Certificate
        || msg.contains("certificate")
        || msg.contains("ssl")
    {
        Failure::Certificate
    } else if matches!(err.class(), ErrorClass::Net | ErrorClass::Os)
        || msg.contains("connection")
        || msg.contains("network")
        || msg.contains("resolve")
        || msg.contains("timed out")
        || msg.contains("timeout")
    {
        Failure::Network
    } else {
        Failure::Other
    }
}

/// Short reason suitable for an error message
pub fn interpret_git_error(err: &Error) -> String {
    match classify(err) {
        Failure::NotFound => "Repository not found".to_string(),
        Failure::Auth => "Authentication failed".to_string(),
        Failure::PermissionDenied => "Permission denied".to_string(),
        Failure::Network => format!("Network error: {}", err.message()),
        Failure::Certificate => format!("Certificate error: {}", err.message()),
        Failure::Other => match err.class() {
            ErrorClass::Http => format!("HTTP error: {}", err.message()),
            ErrorClass::Ssh => format!("SSH error: {}", err.message()),
            _ => err.message().to_string(),
        },
    }
}
