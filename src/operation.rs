//! # Operations
//!
//! The closed set of repository operations git-assist can perform, plus the
//! argument validation that turns raw command-line values into them.
//!
//! Validation happens before configuration is loaded or git is touched, so a
//! missing required argument never mutates anything.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Format of the timestamp in generated commit messages.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Every command name accepted on the command line.
pub const COMMAND_NAMES: &[&str] = &[
    "add",
    "commit",
    "push",
    "pull",
    "status",
    "auto",
    "sync",
    "add-commit",
    "log",
    "config",
    "revert",
    "undo",
    "discard",
    "force-push",
];

/// Which commit `revert` undoes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertTarget {
    /// The most recent commit (`HEAD`).
    Last,
    /// Any other commit, by identifier.
    Commit(String),
}

impl RevertTarget {
    /// The revision git should revert.
    pub fn revision(&self) -> &str {
        match self {
            RevertTarget::Last => "HEAD",
            RevertTarget::Commit(id) => id,
        }
    }
}

/// A single repository operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Stage everything, or only `path`, then show status.
    Add { path: Option<String> },
    Commit { message: String },
    /// Push, asking before a force push if the normal push is rejected.
    Push,
    Pull,
    Status,
    /// Pull, stage all, commit, push with the force-push fallback.
    Auto { message: Option<String> },
    /// Pull, stage all, commit, push without checking any step.
    Sync { message: Option<String> },
    AddCommit { message: String },
    Log,
    /// Point `origin` at the configured endpoint and list remotes.
    Config,
    Revert { target: RevertTarget },
    /// Move HEAD back one commit, keeping its changes staged.
    Undo,
    /// Restore all tracked files, or only `path`, to the last commit.
    Discard { path: Option<String> },
    ForcePush,
}

impl Operation {
    /// Name of the operation as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Commit { .. } => "commit",
            Operation::Push => "push",
            Operation::Pull => "pull",
            Operation::Status => "status",
            Operation::Auto { .. } => "auto",
            Operation::Sync { .. } => "sync",
            Operation::AddCommit { .. } => "add-commit",
            Operation::Log => "log",
            Operation::Config => "config",
            Operation::Revert { .. } => "revert",
            Operation::Undo => "undo",
            Operation::Discard { .. } => "discard",
            Operation::ForcePush => "force-push",
        }
    }

    /// Build a `commit` operation, requiring a message.
    pub fn commit(message: Option<String>) -> Result<Self> {
        let message = require(message, "commit", "<message>")?;
        Ok(Operation::Commit { message })
    }

    /// Build an `add-commit` operation, requiring a message.
    pub fn add_commit(message: Option<String>) -> Result<Self> {
        let message = require(message, "add-commit", "<message>")?;
        Ok(Operation::AddCommit { message })
    }

    /// Build a `revert` operation from `last` or a commit identifier.
    pub fn revert(target: Option<String>) -> Result<Self> {
        let target = require(target, "revert", "<last|commit-id>")?;
        let target = if target == "last" {
            RevertTarget::Last
        } else {
            RevertTarget::Commit(target)
        };
        Ok(Operation::Revert { target })
    }
}

fn require(value: Option<String>, command: &str, placeholder: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Usage {
            usage: usage(command, placeholder),
        }),
    }
}

/// Usage line for a command that takes a required argument.
pub fn usage(command: &str, placeholder: &str) -> String {
    format!("Usage: git-assist {} {}", command, placeholder)
}

/// Commit message used by `auto` and `sync` when none is given.
///
/// `prefix` is `"Auto-commit"` or `"Sync"`.
pub fn default_message(prefix: &str, now: NaiveDateTime) -> String {
    format!("{} {}", prefix, now.format(TIMESTAMP_FORMAT))
}
