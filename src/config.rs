//! # Configuration
//!
//! Loads the `git-assist.yaml` file that carries the identity, repository
//! location and remote credentials used by every command.
//!
//! ## Example
//!
//! ```yaml
//! name: Jane Doe
//! email: jane@example.com
//! username: jdoe
//! token: ghp_example
//! local_path: ~/projects/notes
//! repo_name: notes
//! branch: main        # optional, defaults to "main"
//! host: github.com    # optional, defaults to "github.com"
//! ```
//!
//! The configuration is read once at startup and passed by reference to the
//! code that needs it; nothing in the crate keeps it in global state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::defaults::{self, DEFAULT_BRANCH, DEFAULT_HOST, TOKEN_ENV_VAR};
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};

/// Values loaded from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Commit author name, written to the global git identity.
    pub name: String,
    /// Commit author email, written to the global git identity.
    pub email: String,
    /// Account name on the remote host; also the repository owner.
    pub username: String,
    /// Access token embedded in the remote endpoint.
    #[serde(default)]
    pub token: String,
    /// Local working copy every command runs in.
    pub local_path: PathBuf,
    /// Repository name on the remote host.
    pub repo_name: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Config {
    /// The repository directory with `~` expanded.
    pub fn repository_path(&self) -> PathBuf {
        defaults::expand_home(&self.local_path)
    }

    /// Build the authenticated remote endpoint for this configuration.
    pub fn endpoint(&self) -> Result<Endpoint> {
        Endpoint::authenticated(&self.host, &self.username, &self.token, &self.repo_name)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("username", self.username.as_str()),
            ("token", self.token.as_str()),
            ("repo_name", self.repo_name.as_str()),
            ("branch", self.branch.as_str()),
            ("host", self.host.as_str()),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                let hint = if field == "token" {
                    format!("Set 'token:' or export {}", TOKEN_ENV_VAR)
                } else {
                    format!("Set '{}:' in the configuration file", field)
                };
                return Err(Error::ConfigParse {
                    message: format!("field `{}` is empty", field),
                    hint: Some(hint),
                });
            }
        }

        if self.local_path.as_os_str().is_empty() {
            return Err(Error::ConfigParse {
                message: "field `local_path` is empty".to_string(),
                hint: Some("Set 'local_path:' to the working copy directory".to_string()),
            });
        }

        Ok(())
    }
}

/// Parse a configuration from a YAML string.
///
/// A token left empty in the file is taken from `GIT_ASSIST_TOKEN`.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let mut config: Config = serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some(
            "Expected keys: name, email, username, token, local_path, repo_name".to_string(),
        ),
    })?;

    if config.token.trim().is_empty() {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            config.token = token;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Load a configuration from a file.
///
/// A missing file is reported as [`Error::ConfigMissing`].
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigMissing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
