//! Completion suggestions implementation.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use rustc_hash::FxHashSet;

use super::AnalysisOptions;
use crate::base::Position;
use crate::base::text_utils::{char_to_byte, nth_line};
use crate::compose::{self, EntryKind, NodeId, ParseResult};
use crate::dockerfile::{self, DockerfileParse, INSTRUCTIONS, Instruction};
use crate::schema::{SchemaRegistry, Variant};
use crate::syntax::{DocumentKind, NodePart, Resolve};

/// `--from=` being typed at the end of the text before the cursor.
static COPY_FROM_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)--from=[\w.\-]*$").ok());

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompletionKind {
    /// A Compose key from the schema.
    Property,
    /// A Dockerfile instruction.
    Keyword,
    /// A build stage alias.
    Stage,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Property => 10, // Property
            CompletionKind::Keyword => 14,  // Keyword
            CompletionKind::Stage => 18,    // Reference
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label).
    pub insert_text: Option<Arc<str>>,
    /// Whether `insert_text` uses snippet placeholders.
    pub is_snippet: bool,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            is_snippet: false,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set an insert text with `${1:placeholder}` syntax.
    pub fn with_snippet(mut self, snippet: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(snippet.into());
        self.is_snippet = true;
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }
}

/// Get completion suggestions at a position with default options.
///
/// # Arguments
/// * `kind` - Which parser the text goes through
/// * `text` - Full document text
/// * `line` - Cursor line (0-indexed)
/// * `col` - Cursor column (0-indexed, in characters)
/// * `variant` - Compose variant declared by the host, if any
///
/// # Returns
/// Suggestions in schema declaration order. Empty when nothing applies.
pub fn completions(
    kind: DocumentKind,
    text: &str,
    line: u32,
    col: u32,
    variant: Option<Variant>,
) -> Vec<CompletionItem> {
    completions_with_options(kind, text, line, col, variant, &AnalysisOptions::default())
}

pub fn completions_with_options(
    kind: DocumentKind,
    text: &str,
    line: u32,
    col: u32,
    variant: Option<Variant>,
    options: &AnalysisOptions,
) -> Vec<CompletionItem> {
    let position = Position::new(line, col);
    match kind {
        DocumentKind::Compose => {
            let parse = compose::parse(text);
            let variant = super::effective_variant(&parse, variant, options);
            compose_completions(&parse, position, variant, SchemaRegistry::builtin())
        }
        DocumentKind::Dockerfile => {
            let parse = dockerfile::parse(text);
            dockerfile_completions(&parse, text, position, options)
        }
    }
}

/// Schema keys that may be added where the cursor is.
///
/// Keys already present in the same mapping are left out, except one on the
/// cursor's own line (the key being edited).
pub fn compose_completions(
    parse: &ParseResult,
    position: Position,
    variant: Variant,
    registry: &SchemaRegistry,
) -> Vec<CompletionItem> {
    let resolution = parse.resolve(position);
    let container = match resolution.part {
        NodePart::Value => return Vec::new(),
        NodePart::Key => parse.parent(resolution.node).unwrap_or(NodeId::ROOT),
        NodePart::Body => resolution.node,
    };
    let Some(node) = parse.node(container) else {
        return Vec::new();
    };
    if !node.accepts_keys() {
        tracing::trace!(path = %node.path, "container does not take keys");
        return Vec::new();
    }

    let existing: FxHashSet<&str> = parse
        .children(container)
        .filter(|(_, child)| child.entry == EntryKind::Key && child.line != position.line)
        .map(|(_, child)| child.key.as_str())
        .collect();

    registry
        .candidates_at(&node.path, variant)
        .into_iter()
        .filter_map(|entry| {
            let label = entry.label()?;
            (!existing.contains(label)).then_some((label, entry))
        })
        .enumerate()
        .map(|(i, (label, entry))| {
            CompletionItem::new(label, CompletionKind::Property)
                .with_detail(entry.pattern().as_str())
                .with_documentation(entry.description())
                .with_priority(i as u32)
        })
        .collect()
}

/// Instruction keywords at the start of a line, or stage aliases after
/// `COPY --from=`.
pub fn dockerfile_completions(
    parse: &DockerfileParse,
    text: &str,
    position: Position,
    options: &AnalysisOptions,
) -> Vec<CompletionItem> {
    let line_text = nth_line(text, position.line).unwrap_or("");
    let before = &line_text[..char_to_byte(line_text, position.column as usize)];
    let directive = parse.directive_at(position.line);

    if let Some(directive) = directive {
        if directive.instruction == Instruction::Copy && is_copy_from_prefix(before) {
            return stage_completions(parse, directive.line);
        }
    }

    let continued = directive.is_some_and(|d| d.line < position.line)
        || previous_line_continues(text, position.line, parse.escape());
    if continued {
        return Vec::new();
    }

    if before.trim_start().bytes().all(|b| b.is_ascii_alphabetic()) {
        keyword_completions(options)
    } else {
        Vec::new()
    }
}

/// Get keyword completions.
fn keyword_completions(options: &AnalysisOptions) -> Vec<CompletionItem> {
    INSTRUCTIONS
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let item = CompletionItem::new(info.instruction.as_str(), CompletionKind::Keyword)
                .with_documentation(info.description)
                .with_priority(i as u32);
            if options.keyword_snippets {
                item.with_snippet(info.snippet)
            } else {
                item
            }
        })
        .collect()
}

fn stage_completions(parse: &DockerfileParse, line: u32) -> Vec<CompletionItem> {
    parse
        .stages()
        .take_while(|d| d.line < line)
        .filter_map(|d| Some((d.stage_alias.as_deref()?, d)))
        .enumerate()
        .map(|(i, (alias, stage))| {
            let mut item = CompletionItem::new(alias, CompletionKind::Stage).with_priority(i as u32);
            if let Some(image) = &stage.base_image {
                item = item.with_detail(format!("FROM {image}"));
            }
            item
        })
        .collect()
}

fn is_copy_from_prefix(before: &str) -> bool {
    COPY_FROM_PREFIX
        .as_ref()
        .is_some_and(|re| re.is_match(before))
}

fn previous_line_continues(text: &str, line: u32, escape: char) -> bool {
    let Some(previous) = line.checked_sub(1).and_then(|l| nth_line(text, l)) else {
        return false;
    };
    let trimmed = previous.trim();
    !trimmed.starts_with('#') && trimmed.ends_with(escape)
}
