//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use git_assist::defaults::CONFIG_ENV_VAR;
use git_assist::error::Error;
use git_assist::operation::Operation;
use git_assist::output::OutputConfig;
use git_assist::suggestions;

use crate::commands;
use crate::commands::run::RunOptions;

const EXAMPLES: &str = "\
Examples:
  git-assist add                      Stage all changes
  git-assist add notes/today.md       Stage one file
  git-assist commit \"Fix typo\"        Commit staged changes
  git-assist add-commit \"Daily notes\" Stage everything and commit
  git-assist auto                     Pull, stage, commit with a timestamp, push
  git-assist sync \"Evening sync\"      Pull, stage, commit, push without checks
  git-assist revert last              Revert the most recent commit
  git-assist revert a1b2c3d           Revert a specific commit
  git-assist discard draft.md         Throw away uncommitted edits to one file

Exit status:
  0 once an operation has run, even if a git step failed (reported as a warning)
  1 for help, a missing argument, or an unusable configuration or repository";

/// git-assist - Everyday git chores for one configured repository
#[derive(Parser, Debug)]
#[command(name = "git-assist")]
#[command(version, about, long_about = None)]
#[command(disable_help_subcommand = true, after_help = EXAMPLES)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to git-assist.yaml next to the executable)
    #[arg(short, long, global = true, value_name = "FILE", env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Answer yes to the force-push prompt without asking
    #[arg(short, long, global = true)]
    yes: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto",
          value_parser = ["auto", "always", "never"])]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn",
          value_parser = ["off", "error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stage all changes, or only PATH, then show status
    Add {
        /// File or directory to stage
        #[arg(allow_hyphen_values = true)]
        path: Option<String>,
    },
    /// Commit staged changes
    Commit {
        /// Commit message (required)
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Push; if rejected, ask before force pushing
    Push,
    /// Pull from the configured branch
    Pull,
    /// Show working tree status
    Status,
    /// Pull, stage all, commit and push (asks before force pushing)
    Auto {
        /// Commit message (defaults to "Auto-commit <timestamp>")
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Pull, stage all, commit and push without checking any step
    Sync {
        /// Commit message (defaults to "Sync <timestamp>")
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Stage all changes and commit
    AddCommit {
        /// Commit message (required)
        #[arg(allow_hyphen_values = true)]
        message: Option<String>,
    },
    /// Show the ten most recent commits
    Log,
    /// Point origin at the configured remote and list remotes
    Config,
    /// Revert the last commit or a specific one, without an editor
    Revert {
        /// "last" or a commit id (required)
        #[arg(value_name = "last|COMMIT", allow_hyphen_values = true)]
        target: Option<String>,
    },
    /// Undo the last commit, keeping its changes staged
    Undo,
    /// Discard uncommitted changes to all files, or only PATH (no confirmation)
    Discard {
        /// File or directory to restore
        #[arg(allow_hyphen_values = true)]
        path: Option<String>,
    },
    /// Force push to the configured branch (no confirmation)
    ForcePush,
    /// Print a shell completion script
    Completions(commands::completions::CompletionsArgs),
    /// Print this help
    #[command(hide = true)]
    Help,
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// What the parsed command line asks for.
enum Request {
    /// Print the help; `unknown` names an unrecognised selector.
    Help { unknown: Option<String> },
    Completions(commands::completions::CompletionsArgs),
    Repository(Operation),
}

impl Commands {
    fn into_request(self) -> git_assist::error::Result<Request> {
        let operation = match self {
            Commands::Help => return Ok(Request::Help { unknown: None }),
            Commands::Unknown(args) => {
                return Ok(Request::Help {
                    unknown: args.into_iter().next(),
                })
            }
            Commands::Completions(args) => return Ok(Request::Completions(args)),
            Commands::Add { path } => Operation::Add { path },
            Commands::Commit { message } => Operation::commit(message)?,
            Commands::Push => Operation::Push,
            Commands::Pull => Operation::Pull,
            Commands::Status => Operation::Status,
            Commands::Auto { message } => Operation::Auto { message },
            Commands::Sync { message } => Operation::Sync { message },
            Commands::AddCommit { message } => Operation::add_commit(message)?,
            Commands::Log => Operation::Log,
            Commands::Config => Operation::Config,
            Commands::Revert { target } => Operation::revert(target)?,
            Commands::Undo => Operation::Undo,
            Commands::Discard { path } => Operation::Discard { path },
            Commands::ForcePush => Operation::ForcePush,
        };
        Ok(Request::Repository(operation))
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        let request = match self.command {
            None => Request::Help { unknown: None },
            Some(command) => match command.into_request() {
                Ok(request) => request,
                Err(Error::Usage { usage }) => {
                    eprintln!("{}", usage);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            },
        };

        match request {
            Request::Help { unknown } => {
                if let Some(name) = unknown {
                    eprintln!("{}\n", suggestions::unknown_command(&name));
                }
                print_help()?;
                return Ok(ExitCode::FAILURE);
            }
            Request::Completions(args) => commands::completions::execute(args)?,
            Request::Repository(operation) => {
                let options = RunOptions {
                    config: self.config,
                    yes: self.yes,
                };
                commands::run::execute(operation, options, &output)?;
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

fn print_help() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Initialise `env_logger` from `--log-level`; `RUST_LOG` takes precedence.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second initialisation only happens in tests
    let _ = builder.try_init();
}
