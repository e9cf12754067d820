//! Best-effort Dockerfile lexer producing one record per logical line.

use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use super::Instruction;
use super::lexer::classify_keyword;
use crate::base::text_utils::byte_to_char;
use crate::base::{ColumnSpan, Position};
use crate::syntax::{Issue, IssueKind, NodePart, Resolution, Resolve};

/// `FROM [--flag=value ...] <image>[:<tag>] [AS <alias>]`
static FROM_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*FROM\s+(?:--\S+\s+)*(?P<image>[\w\-/:.@${}]+)(?:\s+AS\s+(?P<alias>[a-zA-Z][\w.\-]*))?\s*$",
    )
    .ok()
});

/// `# name=value` parser directive at the top of the file.
static PARSER_DIRECTIVE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^#\s*(?P<name>[a-zA-Z][a-zA-Z0-9_]*)\s*=\s*(?P<value>\S+)$").ok()
});

const DEFAULT_ESCAPE: char = '\\';

/// One instruction, joined across continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveRecord {
    pub instruction: Instruction,
    /// The keyword as written (`from`, `Run`, or whatever an unknown line starts with).
    pub keyword: SmolStr,
    /// Everything after the keyword, continuations joined, trimmed.
    pub arguments: String,
    /// Stage name from `FROM <image> AS <alias>`.
    pub stage_alias: Option<SmolStr>,
    /// Image reference of a FROM line.
    pub base_image: Option<SmolStr>,
    /// First physical line (0-indexed).
    pub line: u32,
    /// Last physical line, after continuations.
    pub end_line: u32,
    /// Columns of the keyword on `line`.
    pub keyword_span: ColumnSpan,
}

impl DirectiveRecord {
    pub fn covers_line(&self, line: u32) -> bool {
        self.line <= line && line <= self.end_line
    }
}

/// Identifies what a Dockerfile position resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveNode {
    /// No directive covers the position.
    Root,
    /// Index into [`DockerfileParse::directives`].
    Directive(usize),
}

/// Parsed Dockerfile: directive records in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerfileParse {
    directives: Vec<DirectiveRecord>,
    issues: Vec<Issue>,
    escape: char,
}

impl DockerfileParse {
    pub fn directives(&self) -> &[DirectiveRecord] {
        &self.directives
    }

    pub fn into_directives(self) -> Vec<DirectiveRecord> {
        self.directives
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The line-continuation character in effect.
    pub fn escape(&self) -> char {
        self.escape
    }

    pub fn get(&self, node: DirectiveNode) -> Option<&DirectiveRecord> {
        match node {
            DirectiveNode::Root => None,
            DirectiveNode::Directive(i) => self.directives.get(i),
        }
    }

    /// The directive whose physical lines include `line`.
    pub fn directive_at(&self, line: u32) -> Option<&DirectiveRecord> {
        let idx = self.directives.partition_point(|d| d.line <= line);
        let directive = self.directives.get(idx.checked_sub(1)?)?;
        directive.covers_line(line).then_some(directive)
    }

    /// FROM directives that name a stage, in order.
    pub fn stages(&self) -> impl Iterator<Item = &DirectiveRecord> {
        self.directives.iter().filter(|d| d.stage_alias.is_some())
    }

    /// Stage aliases declared on lines before `line`.
    pub fn stages_before(&self, line: u32) -> impl Iterator<Item = &str> {
        self.stages()
            .take_while(move |d| d.line < line)
            .filter_map(|d| d.stage_alias.as_deref())
    }

    /// Find a stage by alias. Stage names are case-insensitive.
    pub fn stage(&self, alias: &str) -> Option<&DirectiveRecord> {
        self.stages().find(|d| {
            d.stage_alias
                .as_deref()
                .is_some_and(|a| a.eq_ignore_ascii_case(alias))
        })
    }
}

impl Resolve for DockerfileParse {
    type Node = DirectiveNode;

    fn resolve(&self, position: Position) -> Resolution<DirectiveNode> {
        let idx = self.directives.partition_point(|d| d.line <= position.line);
        let Some(i) = idx.checked_sub(1) else {
            return Resolution::new(DirectiveNode::Root, NodePart::Body);
        };
        let directive = &self.directives[i];
        if !directive.covers_line(position.line) {
            return Resolution::new(DirectiveNode::Root, NodePart::Body);
        }

        let part = if position.line == directive.line
            && position.column <= directive.keyword_span.end
        {
            NodePart::Key
        } else {
            NodePart::Value
        };
        Resolution::new(DirectiveNode::Directive(i), part)
    }
}

/// Parse a Dockerfile. Never fails; every line is either a record, a
/// comment, blank, or part of a continuation.
pub fn parse(text: &str) -> DockerfileParse {
    let lines: Vec<&str> = text.lines().collect();
    let escape = escape_directive(&lines).unwrap_or(DEFAULT_ESCAPE);

    let mut directives = Vec::new();
    let mut issues = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let first = lines[i];
        if is_skippable(first) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        let mut logical = String::from(first);
        while let Some(cut) = continuation_cut(&logical, escape) {
            logical.truncate(cut);
            let mut next = end + 1;
            while next < lines.len() && is_skippable(lines[next]) {
                next += 1;
            }
            if next >= lines.len() {
                break;
            }
            logical.push_str(lines[next]);
            end = next;
        }

        let record = directive(&logical, first, start as u32, end as u32);
        if !record.instruction.is_known() {
            tracing::trace!(line = start, keyword = %record.keyword, "unknown instruction");
            issues.push(Issue::new(IssueKind::UnknownInstruction, start as u32));
        }
        directives.push(record);
        i = end + 1;
    }

    tracing::debug!(
        directives = directives.len(),
        issues = issues.len(),
        "parsed dockerfile"
    );

    DockerfileParse {
        directives,
        issues,
        escape,
    }
}

/// Parse a Dockerfile and keep only the directive records.
pub fn parse_directives(text: &str) -> Vec<DirectiveRecord> {
    parse(text).into_directives()
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Byte length to keep when `line` ends with the escape character.
fn continuation_cut(line: &str, escape: char) -> Option<usize> {
    let trimmed = line.trim_end();
    trimmed
        .ends_with(escape)
        .then(|| trimmed.len() - escape.len_utf8())
}

/// The `# escape=` parser directive, if the file opens with one.
///
/// Directives are only honoured before the first non-directive line.
fn escape_directive(lines: &[&str]) -> Option<char> {
    let re = PARSER_DIRECTIVE.as_ref()?;
    for line in lines {
        let caps = re.captures(line.trim())?;
        if caps["name"].eq_ignore_ascii_case("escape") {
            return match &caps["value"] {
                "`" => Some('`'),
                "\\" => Some('\\'),
                _ => None,
            };
        }
    }
    None
}

fn directive(logical: &str, first: &str, line: u32, end_line: u32) -> DirectiveRecord {
    let indent = first.len() - first.trim_start().len();
    let keyword_len = first[indent..]
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .count();
    let keyword = &first[indent..indent + keyword_len];
    let instruction = classify_keyword(keyword);

    let start_col = byte_to_char(first, indent);
    let keyword_span = ColumnSpan::new(start_col, start_col + keyword_len as u32);

    let arguments = logical
        .get(indent + keyword_len..)
        .unwrap_or("")
        .trim()
        .to_string();

    let (base_image, stage_alias) = if instruction == Instruction::From {
        from_parts(logical)
    } else {
        (None, None)
    };

    DirectiveRecord {
        instruction,
        keyword: keyword.into(),
        arguments,
        stage_alias,
        base_image,
        line,
        end_line,
        keyword_span,
    }
}

fn from_parts(logical: &str) -> (Option<SmolStr>, Option<SmolStr>) {
    let Some(caps) = FROM_LINE.as_ref().and_then(|re| re.captures(logical)) else {
        return (None, None);
    };
    (
        caps.name("image").map(|m| m.as_str().into()),
        caps.name("alias").map(|m| m.as_str().into()),
    )
}
