//! Default values for git-assist configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// File name of the configuration file looked up next to the executable.
pub const DEFAULT_CONFIG_FILENAME: &str = "git-assist.yaml";

/// Environment variable that can name the configuration file.
pub const CONFIG_ENV_VAR: &str = "GIT_ASSIST_CONFIG";

/// Environment variable that supplies the access token when the file leaves it empty.
pub const TOKEN_ENV_VAR: &str = "GIT_ASSIST_TOKEN";

/// Branch pushed to and pulled from when the configuration names none.
pub const DEFAULT_BRANCH: &str = "main";

/// Git host used to build the remote endpoint.
pub const DEFAULT_HOST: &str = "github.com";

/// Name of the remote managed by git-assist.
pub const REMOTE_NAME: &str = "origin";

/// Returns the default configuration file path.
///
/// The configuration lives alongside the `git-assist` executable. When the
/// executable location cannot be determined, or no file exists there, the
/// current directory is used instead.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILENAME)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
