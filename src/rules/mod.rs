// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module runs a fixed sequence of independent checks over a
//! commit message and aggregates their results into a [`RunOutcome`].

mod builtin;
mod engine;
mod report;

pub use builtin::{Rule, BUILTIN_RULES, MAX_BODY_LINE_LENGTH, MAX_HEADER_LENGTH};
pub use engine::RuleEngine;
pub use report::{RuleResult, RunOutcome};
