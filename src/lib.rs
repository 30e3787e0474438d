//! # git-assist Library
//!
//! Everyday git chores for one configured repository: stage, commit, push,
//! pull, sync, revert, undo and discard, driven by a small YAML
//! configuration file that carries the identity and remote credentials.
//!
//! ## Quick Example
//!
//! ```
//! use git_assist::operation::{Operation, RevertTarget};
//!
//! let op = Operation::revert(Some("last".to_string())).unwrap();
//! assert_eq!(op, Operation::Revert { target: RevertTarget::Last });
//!
//! // A missing commit message is a usage error, caught before git runs
//! assert!(Operation::commit(None).is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the `git-assist.yaml` values, loaded once
//!   and passed by reference.
//! - **Operations (`operation`)**: the closed set of things git-assist can do.
//! - **Git runner (`git`)**: the `Git` trait and the `SystemGit`
//!   implementation that shells out to the real executable.
//! - **Confirmation (`prompt`)**: the injected yes/no capability used before
//!   a force push.
//! - **Endpoint (`endpoint`)**: the authenticated remote URL and credential
//!   redaction for logs.
//!
//! ## Execution Flow
//!
//! 1. **Validate** the command-line arguments into an `Operation`.
//! 2. **Load** the configuration.
//! 3. **Enter** the configured repository directory (`preflight`).
//! 4. **Configure** the global identity and the `origin` remote.
//! 5. **Dispatch** the operation (`dispatch`).

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod git;
pub mod operation;
pub mod output;
pub mod preflight;
pub mod prompt;
pub mod suggestions;
