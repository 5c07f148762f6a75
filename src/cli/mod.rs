// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commitlint.
//!
//! This module handles command-line argument parsing and the lint run.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::{
    run, run_with_source, LintStatus, EXIT_SUCCESS, EXIT_UNAVAILABLE, EXIT_VIOLATIONS,
};
