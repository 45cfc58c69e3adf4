//! Git authentication callbacks
//!
//! Authentication is delegated to git's native credential system:
//! - SSH agent, then keys from ~/.ssh/
//! - Git credential helpers
//! - Anonymous access for public HTTPS remotes

use git2::{Cred, CredentialType, Error, ErrorClass, ErrorCode, RemoteCallbacks};

const SSH_KEY_NAMES: &[&str] = &["id_ed25519", "id_rsa", "id_ecdsa"];

fn auth_failed(message: &str) -> Error {
    Error::new(ErrorCode::Auth, ErrorClass::Http, message)
}

fn ssh_key_from_disk(username: &str) -> Result<Cred, Error> {
    let ssh_dir = dirs::home_dir().unwrap_or_default().join(".ssh");

    SSH_KEY_NAMES
        .iter()
        .map(|name| (ssh_dir.join(name), ssh_dir.join(format!("{name}.pub"))))
        .filter(|(private_key, _)| private_key.exists())
        .find_map(|(private_key, public_key)| {
            let public_key = public_key.exists().then_some(public_key.as_path());
            Cred::ssh_key(username, public_key, &private_key, None).ok()
        })
        .ok_or_else(|| auth_failed("no usable SSH key found"))
}

fn user_pass(url: &str, username_from_url: Option<&str>) -> Result<Cred, Error> {
    if let Ok(config) = git2::Config::open_default() {
        if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
            return Ok(cred);
        }
    }

    // Public HTTPS remotes: let the server answer with the real error.
    Cred::userpass_plaintext(username_from_url.unwrap_or(""), "")
}

fn credentials(
    url: &str,
    username_from_url: Option<&str>,
    allowed_types: CredentialType,
) -> Result<Cred, Error> {
    if allowed_types.contains(CredentialType::DEFAULT) {
        return Cred::default();
    }

    if allowed_types.contains(CredentialType::SSH_KEY) {
        let username = username_from_url.unwrap_or("git");
        return Cred::ssh_key_from_agent(username).or_else(|_| ssh_key_from_disk(username));
    }

    if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
        return user_pass(url, username_from_url);
    }

    Err(auth_failed("authentication failed"))
}

/// Remote callbacks with credential negotiation wired in
pub fn remote_callbacks() -> RemoteCallbacks<'static> {
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(credentials);
    callbacks
}
