//! # Error Handling
//!
//! This module defines the centralized error type for `git-assist`. It uses
//! the `thiserror` library to describe every fatal failure mode with enough
//! context for a useful message.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all fatal errors. A failing `git` invocation is
//!   *not* one of them: tool failures are reported as a `false` status by the
//!   [`crate::git::Git`] runner and handled by the dispatcher.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for git-assist operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}\n  hint: create it or point --config at an existing file", path.display())]
    ConfigMissing { path: PathBuf },

    /// The configuration file exists but could not be used.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The configured repository directory cannot be used as working directory.
    #[error("Cannot enter repository directory {}: {message}", path.display())]
    DirectoryUnreachable { path: PathBuf, message: String },

    /// A required command-line argument was omitted.
    #[error("{usage}")]
    Usage { usage: String },

    /// The `git` executable could not be started at all.
    #[error("Failed to execute git {command}: {message}")]
    GitSpawn { command: String, message: String },

    /// The confirmation prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
