//! Recovered parse conditions.
//!
//! Both parsers are total: malformed input never aborts a parse. What was
//! skipped or guessed is recorded as an [`Issue`] next to the parse output so
//! callers can inspect it, but nothing here is surfaced to end users.

use std::fmt;

/// Why a Compose line was left out of the key tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedReason {
    /// The indentation contains a tab character.
    TabIndent,
    /// The line is neither `key:` nor `- item`.
    Unrecognised,
}

/// Category of a recovered condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueKind {
    /// A line was excluded from the tree.
    MalformedLine(MalformedReason),
    /// A directive keyword is not a known instruction; kept as `UNKNOWN`.
    UnknownInstruction,
}

impl IssueKind {
    /// Stable short code, suitable for filtering.
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::MalformedLine(_) => "malformed-line",
            IssueKind::UnknownInstruction => "unknown-instruction",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            IssueKind::MalformedLine(MalformedReason::TabIndent) => {
                "tab characters are not allowed in indentation"
            }
            IssueKind::MalformedLine(MalformedReason::Unrecognised) => {
                "expected a `key:` or `- item` line"
            }
            IssueKind::UnknownInstruction => "unknown instruction",
        }
    }
}

/// A recovered condition on one (0-indexed) line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Issue {
    pub kind: IssueKind,
    pub line: u32,
}

impl Issue {
    pub fn new(kind: IssueKind, line: u32) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}): {}",
            self.kind.code(),
            self.line + 1,
            self.kind.message()
        )
    }
}
