//! # git-assist CLI
//!
//! Binary entry point for the `git-assist` command-line tool.
//!
//! It parses the command line with `clap`, runs the selected command and
//! turns the outcome into an exit status. The repository logic lives in the
//! `git_assist` library crate; this binary is a thin wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
