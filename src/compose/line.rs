//! Single-line classification for Compose text.
//!
//! Each physical line is looked at in isolation; nesting is decided later
//! from the indentation this returns.

use crate::base::ColumnSpan;
use crate::base::text_utils::byte_to_char;
use crate::syntax::MalformedReason;

/// A scalar or indicator following `key:` or `- `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Value<'a> {
    pub text: &'a str,
    pub span: ColumnSpan,
}

impl Value<'_> {
    /// `|`, `>-`, `|+2` and friends.
    pub fn is_block_scalar(&self) -> bool {
        let mut chars = self.text.chars();
        matches!(chars.next(), Some('|' | '>'))
            && chars.all(|c| matches!(c, '+' | '-' | '1'..='9'))
    }
}

/// A `key:` with its optional inline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Entry<'a> {
    /// Key text without surrounding quotes.
    pub key: &'a str,
    /// Columns of the key token, quotes included.
    pub key_span: ColumnSpan,
    pub value: Option<Value<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Line<'a> {
    /// Blank, comment or document marker.
    Ignored,
    Malformed(MalformedReason),
    Key {
        indent: usize,
        entry: Entry<'a>,
    },
    Item {
        indent: usize,
        /// Column just past the `-`.
        marker_end: u32,
        /// `- key: value` form.
        entry: Option<Entry<'a>>,
        /// `- value` form.
        value: Option<Value<'a>>,
    },
}

pub(super) fn classify(line: &str) -> Line<'_> {
    let content = line.trim_start_matches([' ', '\t']);
    if content.trim_end().is_empty() || content.starts_with('#') || is_document_marker(content) {
        return Line::Ignored;
    }

    let indent = line.len() - content.len();
    if line[..indent].contains('\t') {
        return Line::Malformed(MalformedReason::TabIndent);
    }

    if content == "-" || content.starts_with("- ") {
        let after_dash = indent + 1;
        let inner_start = after_dash + (line[after_dash..].len() - line[after_dash..].trim_start().len());
        let marker_end = byte_to_char(line, after_dash);
        let inner = &line[inner_start..];
        if inner.is_empty() || inner.starts_with('#') {
            return Line::Item {
                indent,
                marker_end,
                entry: None,
                value: None,
            };
        }
        if let Some(entry) = entry(line, inner_start) {
            return Line::Item {
                indent,
                marker_end,
                entry: Some(entry),
                value: None,
            };
        }
        return Line::Item {
            indent,
            marker_end,
            entry: None,
            value: value(line, inner_start),
        };
    }

    match entry(line, indent) {
        Some(entry) => Line::Key { indent, entry },
        None => Line::Malformed(MalformedReason::Unrecognised),
    }
}

fn is_document_marker(content: &str) -> bool {
    let content = content.trim_end();
    content == "---" || content == "..." || content.starts_with("--- ")
}

/// Parse `key:` starting at byte `start` of `line`.
fn entry(line: &str, start: usize) -> Option<Entry<'_>> {
    let rest = &line[start..];
    let (key, token_end, colon_at) = match rest.chars().next()? {
        quote @ ('"' | '\'') => {
            let close = rest[1..].find(quote)? + 1;
            (&rest[1..close], start + close + 1, start + close + 1)
        }
        '{' | '[' | '#' | '&' | '*' | '!' | '|' | '>' => return None,
        _ => {
            let colon = unquoted_key_end(rest)?;
            let key = rest[..colon].trim_end();
            (key, start + key.len(), start + colon)
        }
    };
    if key.is_empty() {
        return None;
    }

    let after = line[colon_at..].strip_prefix(':')?;
    if !(after.is_empty() || after.starts_with([' ', '\t'])) {
        return None;
    }

    Some(Entry {
        key,
        key_span: ColumnSpan::new(byte_to_char(line, start), byte_to_char(line, token_end)),
        value: value(line, colon_at + 1),
    })
}

/// Byte offset of the `:` ending an unquoted key.
fn unquoted_key_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b':' if matches!(bytes.get(i + 1), None | Some(b' ' | b'\t')) => return Some(i),
            b'#' if i > 0 && matches!(bytes[i - 1], b' ' | b'\t') => return None,
            _ => {}
        }
    }
    None
}

/// Inline value starting at or after byte `start`, comments stripped.
fn value(line: &str, start: usize) -> Option<Value<'_>> {
    let rest = &line[start..];
    let begin = start + (rest.len() - rest.trim_start().len());
    let rest = &line[begin..];
    if rest.is_empty() || rest.starts_with('#') {
        return None;
    }

    let len = match rest.as_bytes()[0] {
        quote @ (b'"' | b'\'') => rest[1..]
            .bytes()
            .position(|b| b == quote)
            .map_or(rest.trim_end().len(), |close| close + 2),
        _ => strip_comment(rest).trim_end().len(),
    };
    let text = &line[begin..begin + len];
    Some(Value {
        text,
        span: ColumnSpan::new(byte_to_char(line, begin), byte_to_char(line, begin + len)),
    })
}

fn strip_comment(text: &str) -> &str {
    match text.find(" #").or_else(|| text.find("\t#")) {
        Some(i) => &text[..i],
        None => text,
    }
}
