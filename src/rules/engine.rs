// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::panic::{self, AssertUnwindSafe};

use crate::commit::CommitMessage;

use super::builtin::{Rule, BUILTIN_RULES};
use super::report::{RuleResult, RunOutcome};

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Create an engine running the built-in rule sequence.
    pub fn new() -> Self {
        Self {
            rules: BUILTIN_RULES.to_vec(),
        }
    }

    /// Evaluate every rule against the message.
    ///
    /// Rules never short-circuit each other. A rule that panics is
    /// reported as a violation and the remaining rules still run.
    pub fn evaluate(&self, message: &CommitMessage) -> RunOutcome {
        tracing::debug!("Evaluating header: {:?}", message.header());

        let results = self
            .rules
            .iter()
            .map(|rule| evaluate_isolated(rule, message))
            .collect::<Vec<_>>();

        let outcome = RunOutcome::new(message.header(), results);
        tracing::debug!(
            "Evaluated {} rules, {} violated",
            outcome.results.len(),
            outcome.violation_count()
        );
        outcome
    }
}

fn evaluate_isolated(rule: &Rule, message: &CommitMessage) -> RuleResult {
    match panic::catch_unwind(AssertUnwindSafe(|| rule.apply(message))) {
        Ok(result) => {
            if result.violated {
                tracing::debug!("Rule {} violated", rule.id);
            }
            result
        }
        Err(_) => {
            tracing::error!("Rule {} panicked while evaluating", rule.id);
            RuleResult::violation(
                rule.id,
                format!("Internal error while evaluating rule '{}'", rule.id),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(raw: &str) -> RunOutcome {
        RuleEngine::new().evaluate(&CommitMessage::new(raw))
    }

    fn violated(outcome: &RunOutcome) -> Vec<&'static str> {
        outcome.violations().map(|r| r.rule).collect()
    }

    #[test]
    fn test_runs_all_rules_in_order() {
        let outcome = evaluate("fix: correct off-by-one error");
        let ids: Vec<_> = outcome.results.iter().map(|r| r.rule).collect();
        assert_eq!(
            ids,
            vec![
                "header-type",
                "subject-empty",
                "subject-length",
                "subject-case",
                "subject-full-stop",
                "body-leading-blank",
                "body-max-length",
            ]
        );
    }

    #[test]
    fn test_valid_message() {
        let outcome = evaluate("fix: correct off-by-one error");
        assert!(outcome.passed());
        assert_eq!(outcome.violation_count(), 0);
    }

    #[test]
    fn test_valid_message_with_body() {
        let outcome = evaluate(
            "feat(cache): add eviction policy\n\nEvicts least recently used entries.\nSee #42.\n",
        );
        assert!(outcome.passed(), "{:?}", violated(&outcome));
    }

    #[test]
    fn test_unknown_type() {
        let outcome = evaluate("foo: correct off-by-one error");
        assert_eq!(violated(&outcome), vec!["header-type"]);
        assert_eq!(outcome.violation_count(), 1);
    }

    #[test]
    fn test_empty_subject() {
        let outcome = evaluate("fix: ");
        assert!(violated(&outcome).contains(&"subject-empty"));
    }

    #[test]
    fn test_uppercase_subject() {
        let outcome = evaluate("fix: Some Message");
        assert_eq!(violated(&outcome), vec!["subject-case"]);
    }

    #[test]
    fn test_full_stop() {
        let outcome = evaluate("fix: some message.");
        assert_eq!(violated(&outcome), vec!["subject-full-stop"]);
    }

    #[test]
    fn test_missing_leading_blank() {
        let outcome = evaluate("fix: some message\nbody immediately\nno blank line");
        assert_eq!(violated(&outcome), vec!["body-leading-blank"]);
    }

    #[test]
    fn test_single_word_does_not_fail_internally() {
        let outcome = evaluate("update");
        assert_eq!(violated(&outcome), vec!["header-type", "subject-empty"]);
        assert!(outcome
            .results
            .iter()
            .all(|r| !r.diagnostic.as_deref().unwrap_or("").contains("Internal error")));
    }

    #[test]
    fn test_empty_message() {
        let outcome = evaluate("");
        assert_eq!(
            violated(&outcome),
            vec!["header-type", "subject-empty", "subject-full-stop"]
        );
    }

    #[test]
    fn test_long_header_collects_every_violation() {
        let header = format!("oops: {}.", "A".repeat(120));
        let outcome = evaluate(&header);
        assert_eq!(
            violated(&outcome),
            vec![
                "header-type",
                "subject-length",
                "subject-case",
                "subject-full-stop"
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let engine = RuleEngine::new();
        let message = CommitMessage::new("Fix: Some thing.\nbody");
        assert_eq!(engine.evaluate(&message), engine.evaluate(&message));
    }

    fn panicking_check(_: &CommitMessage) -> Option<String> {
        panic!("boom")
    }

    fn always_violated(_: &CommitMessage) -> Option<String> {
        Some("always".to_string())
    }

    #[test]
    fn test_panicking_rule_is_isolated() {
        let engine = RuleEngine {
            rules: vec![
                Rule::new("explodes", panicking_check),
                Rule::new("after", always_violated),
            ],
        };

        let outcome = engine.evaluate(&CommitMessage::new("fix: a"));
        assert_eq!(outcome.violation_count(), 2);
        assert_eq!(
            outcome.results[0].diagnostic.as_deref(),
            Some("Internal error while evaluating rule 'explodes'")
        );
        assert_eq!(outcome.results[1].diagnostic.as_deref(), Some("always"));
    }
}
