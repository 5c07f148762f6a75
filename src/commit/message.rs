// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and field extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Commit types accepted at the start of a header.
pub const ALLOWED_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

lazy_static! {
    /// Leading `type`, optional `(scope)`, optional `!`, then the colon.
    static ref TYPE_PREFIX_REGEX: Regex =
        Regex::new(r"^(?P<type>[^\s():!]+)(?:\([^()\s]+\))?!?:")
            .expect("type prefix regex is valid");
}

/// The commit type prefix of a header token, e.g. `fix(parser)!:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePrefix<'a> {
    /// Commit type (fix, feat, ...), not necessarily an allowed one.
    pub commit_type: &'a str,
}

impl<'a> TypePrefix<'a> {
    /// Parse the prefix at the start of a type token.
    ///
    /// Returns `None` when the token does not start with `type:`,
    /// `type(scope):` or either of those with a `!` before the colon.
    pub fn parse(token: &'a str) -> Option<Self> {
        let captures = TYPE_PREFIX_REGEX.captures(token)?;
        Some(Self {
            commit_type: captures.name("type")?.as_str(),
        })
    }

    /// Whether the commit type is one of [`ALLOWED_TYPES`].
    pub fn is_allowed(&self) -> bool {
        ALLOWED_TYPES.contains(&self.commit_type)
    }
}

/// The raw text of a single commit message.
///
/// All accessors are total: a missing line or delimiter yields an empty
/// string or `None`, never a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
}

impl CommitMessage {
    /// Wrap the raw text of a commit message.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The full message text as retrieved.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The first line, trimmed.
    pub fn header(&self) -> &str {
        split_lines(&self.raw).first().copied().unwrap_or("").trim()
    }

    /// The first whitespace-delimited token of the header.
    pub fn type_token(&self) -> &str {
        self.header().split_whitespace().next().unwrap_or("")
    }

    /// Whether the header contains a `:` at all.
    pub fn has_subject_delimiter(&self) -> bool {
        self.header().contains(':')
    }

    /// The text after the last `:` in the header, trimmed.
    pub fn subject(&self) -> &str {
        self.header()
            .rsplit_once(':')
            .map(|(_, subject)| subject.trim())
            .unwrap_or("")
    }

    /// The line directly after the header, if any.
    pub fn second_line(&self) -> Option<&str> {
        split_lines(&self.raw).get(1).copied()
    }

    /// Body lines, from the third line onward.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.raw).into_iter().skip(2)
    }

    /// Header length in characters.
    pub fn header_len(&self) -> usize {
        self.header().chars().count()
    }
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on every line break, treating `\r\n` as one.
///
/// A trailing break does not produce an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

impl From<&str> for CommitMessage {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CommitMessage {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
