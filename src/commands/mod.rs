//! # CLI Command Implementations
//!
//! - `run` executes every repository operation (add, commit, push, ...).
//!   They share one flow, so they share one module; the per-operation git
//!   sequences live in the library's `dispatch` module.
//! - `completions` prints shell completion scripts and needs no
//!   configuration.

pub mod completions;
pub mod run;
