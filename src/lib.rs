// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Conventional commit message gate
//!
//! Reads the latest commit message of a repository, runs it through a fixed
//! sequence of conventional commit rules and reports every violation.
//!
//! # Example
//!
//! ```
//! use commitlint::commit::CommitMessage;
//! use commitlint::rules::RuleEngine;
//!
//! let message = CommitMessage::new("fix: Handle eof.");
//! let outcome = RuleEngine::new().evaluate(&message);
//!
//! assert_eq!(outcome.violation_count(), 2);
//! for violation in outcome.violations() {
//!     println!("{}: {:?}", violation.rule, violation.diagnostic);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{LintError, Result};

/// Version information embedded at compile time.
pub mod version {
    use lazy_static::lazy_static;

    /// The current version of commitlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    lazy_static! {
        /// Version string shown by `--version`.
        pub static ref VERSION_STRING: String = version_string();
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
