// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule results, run outcome and reporting.

use crate::config::OutputFormat;
use console::style;

/// Separator printed before the failure summary.
const FAILURE_SEPARATOR: &str = "=========================";

/// Separator printed before the success summary.
const SUCCESS_SEPARATOR: &str = "==============================";

/// The result of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Identifier of the rule that produced this result.
    pub rule: &'static str,
    /// Whether the rule was violated.
    pub violated: bool,
    /// Human-readable diagnostic, present only on violation.
    pub diagnostic: Option<String>,
}

impl RuleResult {
    /// A passing result.
    pub fn pass(rule: &'static str) -> Self {
        Self {
            rule,
            violated: false,
            diagnostic: None,
        }
    }

    /// A violation with its diagnostic.
    pub fn violation(rule: &'static str, diagnostic: impl Into<String>) -> Self {
        Self {
            rule,
            violated: true,
            diagnostic: Some(diagnostic.into()),
        }
    }
}

/// Aggregate of all rule results for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// The evaluated header, kept for machine-readable output.
    pub header: String,
    /// Results in rule order.
    pub results: Vec<RuleResult>,
}

impl RunOutcome {
    /// Create an outcome from ordered rule results.
    pub fn new(header: impl Into<String>, results: Vec<RuleResult>) -> Self {
        Self {
            header: header.into(),
            results,
        }
    }

    /// Violated results, in rule order.
    pub fn violations(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| r.violated)
    }

    /// Number of violated rules.
    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }

    /// Whether every rule passed.
    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.passed() {
            "All commit messages are valid.".to_string()
        } else {
            format!("The commit message has {} errors.", self.violation_count())
        }
    }

    /// Print the outcome to stdout.
    pub fn print(&self, format: OutputFormat, color: bool) {
        let output = match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Text => self.render_text(color),
        };
        println!("{}", output);
    }

    /// Render diagnostics, separator and summary as text lines.
    pub fn render_text(&self, color: bool) -> String {
        let mut lines: Vec<String> = self
            .violations()
            .filter_map(|r| r.diagnostic.clone())
            .collect();

        if self.passed() {
            lines.push(SUCCESS_SEPARATOR.to_string());
            let summary = style(self.summary()).green().bold();
            lines.push(apply_color(summary, color).to_string());
        } else {
            lines.push(FAILURE_SEPARATOR.to_string());
            let summary = style(self.summary()).red().bold();
            lines.push(apply_color(summary, color).to_string());
        }

        lines.join("\n")
    }

    /// Render as pretty-printed JSON.
    pub fn render_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.passed(),
            "errors": self.violation_count(),
            "header": self.header,
            "violations": self.violations().map(|r| {
                serde_json::json!({
                    "rule": r.rule,
                    "message": r.diagnostic,
                })
            }).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}

/// Leave terminal detection to `console` unless colors are turned off.
fn apply_color<D>(styled: console::StyledObject<D>, color: bool) -> console::StyledObject<D> {
    if color {
        styled
    } else {
        styled.force_styling(false)
    }
}
