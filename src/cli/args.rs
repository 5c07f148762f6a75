// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// commitlint - Conventional commit message gate
///
/// Checks the latest commit message of a repository and exits non-zero
/// when it breaks a rule.
#[derive(Parser, Debug)]
#[command(name = "commitlint")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::VERSION_STRING.as_str())]
#[command(about = "Lint the latest commit message against conventional commit rules", long_about = None)]
pub struct Cli {
    /// Path to the repository (defaults to the current directory)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
