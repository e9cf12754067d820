//! Hover information implementation.

use crate::base::text_utils::{find_word_boundaries, is_key_character, nth_line};
use crate::base::{ColumnSpan, KeyPath, PathSegment, Position, Span};
use crate::compose::{self, EntryKind, ParseResult};
use crate::dockerfile::{self, DirectiveNode, DockerfileParse, Instruction};
use crate::schema::{SchemaEntry, SchemaRegistry, Variant};
use crate::syntax::{DocumentKind, NodePart, Resolve};

use super::AnalysisOptions;

const FROM_FLAG: &str = "--from=";

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Start line of the hovered range (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
}

impl HoverResult {
    pub fn new(contents: impl Into<String>, span: Span) -> Self {
        Self {
            contents: contents.into(),
            start_line: span.start.line,
            start_col: span.start.column,
            end_line: span.end.line,
            end_col: span.end.column,
        }
    }

    pub fn span(&self) -> Span {
        Span::from_coords(self.start_line, self.start_col, self.end_line, self.end_col)
    }
}

/// Get hover information at a position with default options.
///
/// Returns `None` over values, unknown keys and blank space.
pub fn hover(
    kind: DocumentKind,
    text: &str,
    line: u32,
    col: u32,
    variant: Option<Variant>,
) -> Option<HoverResult> {
    hover_with_options(kind, text, line, col, variant, &AnalysisOptions::default())
}

pub fn hover_with_options(
    kind: DocumentKind,
    text: &str,
    line: u32,
    col: u32,
    variant: Option<Variant>,
    options: &AnalysisOptions,
) -> Option<HoverResult> {
    let position = Position::new(line, col);
    match kind {
        DocumentKind::Compose => {
            let parse = compose::parse(text);
            let variant = super::effective_variant(&parse, variant, options);
            compose_hover(&parse, position, variant, SchemaRegistry::builtin())
        }
        DocumentKind::Dockerfile => {
            let parse = dockerfile::parse(text);
            dockerfile_hover(&parse, text, position)
        }
    }
}

/// Describe the Compose key under the cursor.
///
/// The path is looked up for `variant` first, then as a fragment (a file
/// holding only part of a service), and finally both again with
/// [`Variant::All`].
pub fn compose_hover(
    parse: &ParseResult,
    position: Position,
    variant: Variant,
    registry: &SchemaRegistry,
) -> Option<HoverResult> {
    let resolution = parse.resolve(position);
    if resolution.part != NodePart::Key || resolution.node.is_root() {
        return None;
    }
    let node = parse.node(resolution.node)?;
    let path = match node.entry {
        EntryKind::Key => node.path.clone(),
        EntryKind::Item if !node.key.is_empty() => {
            node.path.child(PathSegment::key(node.key.clone()))
        }
        EntryKind::Item => return None,
    };

    let entry = describe(registry, &path, variant)
        .or_else(|| describe(registry, &path, Variant::All))?;
    tracing::trace!(%path, pattern = entry.pattern().as_str(), "hover");

    let key_span = match node.entry {
        EntryKind::Key => node.key_span,
        // Skip the `- ` marker.
        EntryKind::Item => ColumnSpan::new(
            node.key_span.end - node.key.chars().count() as u32,
            node.key_span.end,
        ),
    };
    Some(HoverResult::new(
        entry.description(),
        Span::on_line(node.line, key_span),
    ))
}

fn describe<'r>(registry: &'r SchemaRegistry, path: &KeyPath, variant: Variant) -> Option<&'r SchemaEntry> {
    registry
        .lookup(path, variant)
        .or_else(|| registry.lookup_fragment(path, variant))
}

/// Describe the Dockerfile keyword, or the stage named by `--from=`, under
/// the cursor.
pub fn dockerfile_hover(
    parse: &DockerfileParse,
    text: &str,
    position: Position,
) -> Option<HoverResult> {
    let resolution = parse.resolve(position);
    let DirectiveNode::Directive(_) = resolution.node else {
        return None;
    };
    let directive = parse.get(resolution.node)?;

    match resolution.part {
        NodePart::Key => {
            let info = directive.instruction.info()?;
            Some(HoverResult::new(
                info.description,
                Span::on_line(directive.line, directive.keyword_span),
            ))
        }
        NodePart::Value if directive.instruction == Instruction::Copy => {
            let line_text = nth_line(text, position.line)?;
            let (alias, span) = from_flag_at(line_text, position.column)?;
            let stage = parse.stage(&alias)?;
            let image = stage.base_image.as_deref().unwrap_or("?");
            Some(HoverResult::new(
                format!(
                    "Build stage `{alias}`: `FROM {image}` (line {})",
                    stage.line + 1
                ),
                Span::on_line(position.line, span),
            ))
        }
        _ => None,
    }
}

/// The alias of a `--from=<alias>` argument containing `column`.
///
/// A cursor just past the end of the argument still counts.
fn from_flag_at(line: &str, column: u32) -> Option<(String, ColumnSpan)> {
    let chars: Vec<char> = line.chars().collect();
    let column = column as usize;
    let is_part = |c: char| !c.is_whitespace();
    let (start, end) = find_word_boundaries(&chars, column, is_part).or_else(|| {
        column
            .checked_sub(1)
            .and_then(|prev| find_word_boundaries(&chars, prev, is_part))
    })?;

    let word: String = chars[start..end].iter().collect();
    let alias = word.strip_prefix(FROM_FLAG)?;
    if alias.is_empty() || !alias.chars().all(is_key_character) {
        return None;
    }
    let span = ColumnSpan::new((start + FROM_FLAG.len()) as u32, end as u32);
    Some((alias.to_string(), span))
}
