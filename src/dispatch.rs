//! # Command Dispatcher
//!
//! Maps each [`Operation`] to its ordered list of git invocations.
//!
//! Every operation is a straight sequence of steps. A failing step is
//! reported and the sequence carries on; the only branch on a failure is the
//! force-push fallback shared by `push` and `auto`, which asks the injected
//! [`Confirm`] provider before overwriting remote history. `sync` checks
//! nothing and never asks.

use chrono::{Local, NaiveDateTime};

use crate::config::Config;
use crate::defaults::REMOTE_NAME;
use crate::error::Result;
use crate::git::Git;
use crate::operation::{default_message, Operation};
use crate::output::OutputConfig;
use crate::prompt::Confirm;

const AUTO_PREFIX: &str = "Auto-commit";
const SYNC_PREFIX: &str = "Sync";

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Runs operations against one repository.
pub struct Dispatcher<'a, G: Git, C: Confirm> {
    git: &'a G,
    confirm: &'a C,
    config: &'a Config,
    output: &'a OutputConfig,
    now: fn() -> NaiveDateTime,
}

impl<'a, G: Git, C: Confirm> Dispatcher<'a, G, C> {
    pub fn new(git: &'a G, confirm: &'a C, config: &'a Config, output: &'a OutputConfig) -> Self {
        Self {
            git,
            confirm,
            config,
            output,
            now: local_now,
        }
    }

    /// Replace the clock used for generated commit messages.
    pub fn with_clock(mut self, now: fn() -> NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Execute one operation.
    pub fn execute(&self, operation: &Operation) -> Result<()> {
        log::debug!("Dispatching {}", operation.name());

        match operation {
            Operation::Add { path } => {
                self.stage(path.as_deref())?;
                self.git.run(&["status"])?;
            }
            Operation::Commit { message } => {
                self.commit(message)?;
            }
            Operation::Push => self.push_with_fallback()?,
            Operation::Pull => {
                self.pull()?;
            }
            Operation::Status => {
                self.git.run(&["status"])?;
            }
            Operation::Auto { message } => {
                let message = self.message_or_default(message.as_deref(), AUTO_PREFIX);
                self.pull()?;
                self.stage(None)?;
                self.commit(&message)?;
                self.push_with_fallback()?;
            }
            Operation::Sync { message } => {
                let message = self.message_or_default(message.as_deref(), SYNC_PREFIX);
                let branch = self.branch();
                println!("{}", self.output.step(&format!("Syncing with {}/{}", REMOTE_NAME, branch)));
                self.git.run(&["pull", REMOTE_NAME, branch])?;
                self.git.run(&["add", "-A"])?;
                self.git.run(&["commit", "-m", message.as_str()])?;
                self.git.run(&["push", REMOTE_NAME, branch])?;
                println!("{}", self.output.success("Sync finished"));
            }
            Operation::AddCommit { message } => {
                self.stage(None)?;
                self.commit(message)?;
            }
            Operation::Log => {
                self.git.run(&["log", "--oneline", "-10"])?;
            }
            Operation::Config => {
                let endpoint = self.config.endpoint()?;
                self.report(
                    &["remote", "set-url", REMOTE_NAME, endpoint.as_str()],
                    &format!("Remote {} set to {}", REMOTE_NAME, endpoint),
                    &format!("Could not update remote {}", REMOTE_NAME),
                )?;
                self.git.run(&["remote", "-v"])?;
            }
            Operation::Revert { target } => {
                let revision = target.revision();
                self.report(
                    &["revert", "--no-edit", revision],
                    &format!("Reverted {}", revision),
                    &format!("Revert of {} failed", revision),
                )?;
            }
            Operation::Undo => {
                self.report(
                    &["reset", "--soft", "HEAD~1"],
                    "Last commit undone; its changes are still staged",
                    "Undo failed",
                )?;
            }
            Operation::Discard { path } => {
                let target = path.as_deref().unwrap_or(".");
                let done = match path {
                    Some(path) => format!("Discarded changes to {}", path),
                    None => "Discarded all uncommitted changes".to_string(),
                };
                self.report(&["checkout", "HEAD", "--", target], &done, "Discard failed")?;
            }
            Operation::ForcePush => {
                self.force_push()?;
            }
        }

        Ok(())
    }

    fn branch(&self) -> &str {
        &self.config.branch
    }

    fn message_or_default(&self, message: Option<&str>, prefix: &str) -> String {
        match message {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => default_message(prefix, (self.now)()),
        }
    }

    /// Run a step and print the matching success or warning line.
    fn report(&self, args: &[&str], done: &str, failed: &str) -> Result<bool> {
        let ok = self.git.run(args)?;
        if ok {
            println!("{}", self.output.success(done));
        } else {
            println!("{}", self.output.warning(failed));
        }
        Ok(ok)
    }

    fn stage(&self, path: Option<&str>) -> Result<bool> {
        match path {
            Some(path) => self.report(
                &["add", "--", path],
                &format!("Staged {}", path),
                &format!("Could not stage {}", path),
            ),
            None => self.report(&["add", "-A"], "Staged all changes", "Staging failed"),
        }
    }

    fn commit(&self, message: &str) -> Result<bool> {
        self.report(
            &["commit", "-m", message],
            &format!("Committed: {}", message),
            "Nothing committed",
        )
    }

    fn pull(&self) -> Result<bool> {
        let branch = self.branch();
        println!("{}", self.output.step(&format!("Pulling from {}/{}", REMOTE_NAME, branch)));
        self.report(
            &["pull", REMOTE_NAME, branch],
            "Pull complete",
            "Pull failed",
        )
    }

    fn force_push(&self) -> Result<bool> {
        let branch = self.branch();
        self.report(
            &["push", "--force", REMOTE_NAME, branch],
            &format!("Force pushed to {}/{}", REMOTE_NAME, branch),
            "Force push failed",
        )
    }

    /// Push, and on rejection ask before force pushing.
    fn push_with_fallback(&self) -> Result<()> {
        let branch = self.branch();
        println!("{}", self.output.step(&format!("Pushing to {}/{}", REMOTE_NAME, branch)));

        if self.git.run(&["push", REMOTE_NAME, branch])? {
            println!("{}", self.output.success(&format!("Pushed to {}/{}", REMOTE_NAME, branch)));
            return Ok(());
        }

        println!("{}", self.output.warning("Push was rejected"));
        let prompt = format!(
            "Force push to {}/{}? This overwrites remote history",
            REMOTE_NAME, branch
        );
        if self.confirm.confirm(&prompt)? {
            self.force_push()?;
        } else {
            println!("{}", self.output.warning("Push cancelled, nothing was changed"));
            println!("{}", self.output.hint("Run 'git-assist pull' first, then push again"));
        }

        Ok(())
    }
}
