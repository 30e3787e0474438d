//! # Preflight
//!
//! Steps run once per invocation before an operation is dispatched:
//!
//! 1. [`enter_repository`] resolves the configured working copy and fails
//!    with [`Error::DirectoryUnreachable`] if it cannot be used.
//! 2. [`configure`] writes the global git identity and points the `origin`
//!    remote at the authenticated endpoint, adding the remote if needed.

use std::path::PathBuf;

use log::{info, warn};

use crate::config::Config;
use crate::defaults::REMOTE_NAME;
use crate::error::{Error, Result};
use crate::git::Git;

/// Resolve the configured repository directory.
pub fn enter_repository(config: &Config) -> Result<PathBuf> {
    let path = config.repository_path();

    let resolved = path
        .canonicalize()
        .map_err(|e| Error::DirectoryUnreachable {
            path: path.clone(),
            message: e.to_string(),
        })?;

    if !resolved.is_dir() {
        return Err(Error::DirectoryUnreachable {
            path,
            message: "not a directory".to_string(),
        });
    }

    info!("Using repository {}", resolved.display());
    Ok(resolved)
}

/// Set the global identity and the `origin` remote.
///
/// Failing git steps are logged and do not stop the preflight.
pub fn configure(git: &impl Git, config: &Config) -> Result<()> {
    info!("Setting git identity to {} <{}>", config.name, config.email);
    for (key, value) in [
        ("user.name", config.name.as_str()),
        ("user.email", config.email.as_str()),
    ] {
        if !git.run(&["config", "--global", key, value])? {
            warn!("Could not set global {}", key);
        }
    }

    let endpoint = config.endpoint()?;
    let action = if git.probe(&["remote", "get-url", REMOTE_NAME])? {
        "set-url"
    } else {
        "add"
    };

    info!("Remote {}: {} {}", REMOTE_NAME, action, endpoint);
    if !git.run(&["remote", action, REMOTE_NAME, endpoint.as_str()])? {
        warn!("Could not {} remote {}", action, REMOTE_NAME);
    }

    Ok(())
}
