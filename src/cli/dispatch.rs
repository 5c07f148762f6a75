// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint run: source, engine, report.

use crate::config::LintConfig;
use crate::error::Result;
use crate::git::{GitSource, MessageSource};
use crate::rules::{RuleEngine, RunOutcome};

use super::args::Cli;

/// Exit code when every rule passed.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when at least one rule was violated.
pub const EXIT_VIOLATIONS: i32 = 1;

/// Exit code when no commit message could be obtained or the run
/// could not start.
pub const EXIT_UNAVAILABLE: i32 = 2;

/// Result of a completed lint run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    /// No rule was violated.
    Passed,
    /// At least one rule was violated.
    Failed { violations: usize },
}

impl LintStatus {
    /// Derive the status from an outcome.
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        match outcome.violation_count() {
            0 => LintStatus::Passed,
            violations => LintStatus::Failed { violations },
        }
    }

    /// Process exit code for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            LintStatus::Passed => EXIT_SUCCESS,
            LintStatus::Failed { .. } => EXIT_VIOLATIONS,
        }
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<LintStatus> {
    run_with_source(&cli, &GitSource)
}

/// Run the lint against a specific message source.
///
/// Errors from the source abort the run before any rule is evaluated.
pub fn run_with_source<S: MessageSource>(cli: &Cli, source: &S) -> Result<LintStatus> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load(&cli.path)?
    };

    let format = cli.format.unwrap_or(config.output.format);
    tracing::debug!("Linting latest commit in {:?} ({:?})", cli.path, format);

    let message = source.latest_message(&cli.path)?;

    let outcome = RuleEngine::new().evaluate(&message);
    outcome.print(format, config.output.color);

    let status = LintStatus::from_outcome(&outcome);
    tracing::info!("Lint finished: {:?}", status);
    Ok(status)
}
