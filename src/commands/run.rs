//! # Repository Operations
//!
//! Runs one validated [`Operation`] end to end: load the configuration,
//! enter the repository, configure identity and remote, then dispatch.
//! Any failure before dispatch is fatal and aborts before the operation.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use git_assist::config;
use git_assist::defaults;
use git_assist::dispatch::Dispatcher;
use git_assist::git::SystemGit;
use git_assist::operation::Operation;
use git_assist::output::OutputConfig;
use git_assist::preflight;
use git_assist::prompt::{FixedAnswer, TerminalConfirm};

/// Global options that affect repository operations.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Configuration file; `None` uses the default location.
    pub config: Option<PathBuf>,
    /// Answer "yes" to the force-push prompt without asking.
    pub yes: bool,
}

/// Execute a repository operation.
pub fn execute(operation: Operation, options: RunOptions, output: &OutputConfig) -> Result<()> {
    let config_path = options
        .config
        .unwrap_or_else(defaults::default_config_path);
    debug!("Loading configuration from {}", config_path.display());
    let config = config::from_file(&config_path)?;

    let repository = preflight::enter_repository(&config)?;
    let git = SystemGit::new(repository);
    preflight::configure(&git, &config)?;

    if options.yes {
        Dispatcher::new(&git, &FixedAnswer(true), &config, output).execute(&operation)?;
    } else {
        Dispatcher::new(&git, &TerminalConfirm, &config, output).execute(&operation)?;
    }

    Ok(())
}
