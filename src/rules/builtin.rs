// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule is a pure function of the commit message. The order of
//! [`BUILTIN_RULES`] is the order diagnostics are reported in.

use crate::commit::{CommitMessage, TypePrefix, ALLOWED_TYPES};

use super::report::RuleResult;

/// Maximum header length in characters.
pub const MAX_HEADER_LENGTH: usize = 100;

/// Maximum body line length in characters.
pub const MAX_BODY_LINE_LENGTH: usize = 100;

/// A named check over a commit message.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier, used in logs and JSON output.
    pub id: &'static str,
    check: fn(&CommitMessage) -> Option<String>,
}

impl Rule {
    /// Create a rule from an identifier and a check returning a diagnostic on violation.
    pub const fn new(id: &'static str, check: fn(&CommitMessage) -> Option<String>) -> Self {
        Self { id, check }
    }

    /// Run the check against a message.
    pub fn apply(&self, message: &CommitMessage) -> RuleResult {
        match (self.check)(message) {
            Some(diagnostic) => RuleResult::violation(self.id, diagnostic),
            None => RuleResult::pass(self.id),
        }
    }
}

/// The fixed rule sequence.
pub const BUILTIN_RULES: &[Rule] = &[
    Rule::new("header-type", check_header_type),
    Rule::new("subject-empty", check_subject_empty),
    Rule::new("subject-length", check_subject_length),
    Rule::new("subject-case", check_subject_case),
    Rule::new("subject-full-stop", check_subject_full_stop),
    Rule::new("body-leading-blank", check_body_leading_blank),
    Rule::new("body-max-length", check_body_max_length),
];

/// Check that the header starts with an allowed type, optionally scoped.
fn check_header_type(message: &CommitMessage) -> Option<String> {
    let allowed = TypePrefix::parse(message.type_token())
        .map(|prefix| prefix.is_allowed())
        .unwrap_or(false);

    if allowed {
        None
    } else {
        let types = ALLOWED_TYPES
            .iter()
            .map(|t| format!("{}:", t))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Subject type must be one of: {}", types))
    }
}

/// Check that the header has a non-empty subject after its last colon.
fn check_subject_empty(message: &CommitMessage) -> Option<String> {
    if !message.has_subject_delimiter() || message.subject().is_empty() {
        Some("Subject may not be empty.".to_string())
    } else {
        None
    }
}

/// Check the header length.
fn check_subject_length(message: &CommitMessage) -> Option<String> {
    let len = message.header_len();

    if len > MAX_HEADER_LENGTH {
        Some(format!(
            "Subject must not be longer than {} chars, current length is {}",
            MAX_HEADER_LENGTH, len
        ))
    } else {
        None
    }
}

/// Check that the subject has no uppercase letters.
///
/// An empty subject passes; `subject-empty` reports it.
fn check_subject_case(message: &CommitMessage) -> Option<String> {
    if message.subject().chars().any(char::is_uppercase) {
        Some("Subject must be lower case.".to_string())
    } else {
        None
    }
}

/// Check that the header ends with an alphabetic character.
fn check_subject_full_stop(message: &CommitMessage) -> Option<String> {
    match message.header().chars().last() {
        Some(last) if last.is_alphabetic() => None,
        _ => Some("Subject must end with alphabetic character.".to_string()),
    }
}

/// Check that the line after the header is blank.
fn check_body_leading_blank(message: &CommitMessage) -> Option<String> {
    match message.second_line() {
        Some(line) if !line.trim().is_empty() => {
            Some("Body should have a leading blank line.".to_string())
        }
        _ => None,
    }
}

/// Check body line lengths.
fn check_body_max_length(message: &CommitMessage) -> Option<String> {
    if message
        .body_lines()
        .any(|line| line.chars().count() > MAX_BODY_LINE_LENGTH)
    {
        Some(format!(
            "Body must not have lines longer than {} chars.",
            MAX_BODY_LINE_LENGTH
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(raw: &str) -> CommitMessage {
        CommitMessage::new(raw)
    }

    #[test]
    fn test_header_type_allowed() {
        for t in ALLOWED_TYPES {
            let message = msg(&format!("{}: do something", t));
            assert!(check_header_type(&message).is_none(), "{} rejected", t);
        }
    }

    #[test]
    fn test_header_type_unknown() {
        let issue = check_header_type(&msg("foo: correct off-by-one error")).unwrap();
        assert!(issue.contains("fix:"));
        assert!(issue.contains("refactor:"));
    }

    #[test]
    fn test_header_type_scoped() {
        assert!(check_header_type(&msg("fix(parser): handle eof")).is_none());
        assert!(check_header_type(&msg("feat(api)!: drop v1")).is_none());
        assert!(check_header_type(&msg("feat!: drop v1")).is_none());
    }

    #[test]
    fn test_header_type_prefix_semantics() {
        assert!(check_header_type(&msg("fix:no space")).is_none());
        assert!(check_header_type(&msg("fixup: squash me")).is_some());
        assert!(check_header_type(&msg("fix(parser) handle eof")).is_some());
        assert!(check_header_type(&msg("Fix: handle eof")).is_some());
    }

    #[test]
    fn test_header_type_no_colon() {
        assert!(check_header_type(&msg("update")).is_some());
        assert!(check_header_type(&msg("")).is_some());
    }

    #[test]
    fn test_subject_empty() {
        assert!(check_subject_empty(&msg("fix: ")).is_some());
        assert!(check_subject_empty(&msg("fix:")).is_some());
        assert!(check_subject_empty(&msg("update")).is_some());
        assert!(check_subject_empty(&msg("fix: handle eof")).is_none());
    }

    #[test]
    fn test_subject_length_reports_actual_length() {
        let header = format!("fix: {}", "a".repeat(95));
        assert_eq!(msg(&header).header_len(), MAX_HEADER_LENGTH);
        assert!(check_subject_length(&msg(&header)).is_none());

        let header = format!("fix: {}", "a".repeat(97));
        let issue = check_subject_length(&msg(&header)).unwrap();
        assert!(issue.ends_with("current length is 102"));
    }

    #[test]
    fn test_subject_case() {
        assert!(check_subject_case(&msg("fix: Some Message")).is_some());
        assert!(check_subject_case(&msg("fix: some Message")).is_some());
        assert!(check_subject_case(&msg("fix(SCOPE): some message")).is_none());
        assert!(check_subject_case(&msg("fix: some message")).is_none());
    }

    #[test]
    fn test_subject_case_empty_subject_passes() {
        assert!(check_subject_case(&msg("fix:")).is_none());
        assert!(check_subject_case(&msg("update")).is_none());
    }

    #[test]
    fn test_subject_full_stop() {
        assert!(check_subject_full_stop(&msg("fix: some message.")).is_some());
        assert!(check_subject_full_stop(&msg("fix: bump to 2")).is_some());
        assert!(check_subject_full_stop(&msg("fix: some message")).is_none());
        assert!(check_subject_full_stop(&msg("fix: some message  \n\nbody.")).is_none());
    }

    #[test]
    fn test_subject_full_stop_empty() {
        assert!(check_subject_full_stop(&msg("fix:")).is_some());
        assert!(check_subject_full_stop(&msg("")).is_some());
    }

    #[test]
    fn test_body_leading_blank() {
        assert!(check_body_leading_blank(&msg("fix: a\nbody immediately")).is_some());
        assert!(check_body_leading_blank(&msg("fix: a\n   \nbody")).is_none());
        assert!(check_body_leading_blank(&msg("fix: a")).is_none());
    }

    #[test]
    fn test_body_max_length() {
        let long = "b".repeat(101);
        assert!(check_body_max_length(&msg(&format!("fix: a\n\n{}", long))).is_some());
        assert!(check_body_max_length(&msg(&format!("fix: a\n\n{}", "b".repeat(100)))).is_none());
        assert!(check_body_max_length(&msg("fix: a")).is_none());
    }

    #[test]
    fn test_carriage_return_starts_body() {
        let message = msg("fix: a\rBody text");
        assert!(check_body_leading_blank(&message).is_some());
        assert!(check_subject_case(&message).is_none());
    }

    #[test]
    fn test_body_max_length_ignores_second_line() {
        let long = "b".repeat(150);
        assert!(check_body_max_length(&msg(&format!("fix: a\n{}", long))).is_none());
    }

    #[test]
    fn test_rule_apply() {
        let rule = Rule::new("subject-empty", check_subject_empty);
        let result = rule.apply(&msg("fix:"));
        assert!(result.violated);
        assert_eq!(result.rule, "subject-empty");
        assert_eq!(result.diagnostic.as_deref(), Some("Subject may not be empty."));
    }
}
