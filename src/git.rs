//! # Git Runner
//!
//! Thin layer over the system `git` executable.
//!
//! The dispatcher talks to git only through the [`Git`] trait so that tests
//! can substitute a recording fake. [`SystemGit`] is the real implementation:
//! it runs `git` with the configured repository as the child's working
//! directory, which also means it automatically uses whatever SSH keys,
//! credential helpers and `~/.gitconfig` settings the user has.
//!
//! A non-zero exit status is *not* an error here. It is returned as `false`
//! and the caller decides what a failed step means.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::endpoint::redact;
use crate::error::{Error, Result};

/// Executes git subcommands.
pub trait Git {
    /// Run `git <args>` with output passed through to the user.
    ///
    /// Returns whether the command exited successfully.
    fn run(&self, args: &[&str]) -> Result<bool>;

    /// Run `git <args>` quietly, only to learn whether it succeeds.
    fn probe(&self, args: &[&str]) -> Result<bool>;
}

/// Render arguments for logs with credentials masked.
pub fn describe(args: &[&str]) -> String {
    args.iter()
        .map(|arg| redact(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The real `git` executable, run inside one repository directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.workdir);
        command
    }

    fn spawn_error(args: &[&str], e: std::io::Error) -> Error {
        Error::GitSpawn {
            command: describe(args),
            message: e.to_string(),
        }
    }
}

impl Git for SystemGit {
    fn run(&self, args: &[&str]) -> Result<bool> {
        debug!("Running git {}", describe(args));

        let status = self
            .command(args)
            .status()
            .map_err(|e| Self::spawn_error(args, e))?;

        if !status.success() {
            warn!("git {} exited with {}", describe(args), status);
        }
        Ok(status.success())
    }

    fn probe(&self, args: &[&str]) -> Result<bool> {
        debug!("Probing git {}", describe(args));

        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(args, e))?;

        Ok(output.status.success())
    }
}
