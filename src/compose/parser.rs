//! Indentation-driven tree construction.

use smol_str::SmolStr;

use super::line::{Entry, Line, Value, classify};
use super::tree::{EntryKind, IndexEntry, KeyNode, NodeId, ParseResult, ValueKind};
use crate::base::text_utils::{is_blank, leading_spaces};
use crate::base::{ColumnSpan, PathSegment};
use crate::syntax::{Issue, IssueKind};

/// Parse Compose text into a key tree. Never fails: lines that cannot be
/// placed are recorded as issues and left out.
pub fn parse(text: &str) -> ParseResult {
    let mut builder = TreeBuilder::default();
    let mut line_indents = Vec::new();
    let mut issues = Vec::new();
    // Indent of the node owning an open `|` / `>` block.
    let mut block_owner: Option<usize> = None;

    for (n, raw) in text.lines().enumerate() {
        let line = n as u32;
        let blank = is_blank(raw);
        line_indents.push((!blank).then(|| leading_spaces(raw)));

        if let Some(owner) = block_owner {
            if blank || leading_spaces(raw) > owner {
                tracing::trace!(line, "block scalar text");
                continue;
            }
            block_owner = None;
        }

        match classify(raw) {
            Line::Ignored => {}
            Line::Malformed(reason) => {
                tracing::trace!(line, ?reason, "skipped compose line");
                issues.push(Issue::new(IssueKind::MalformedLine(reason), line));
            }
            Line::Key { indent, entry } => {
                builder.push_key(line, indent, entry);
                if entry.value.is_some_and(|v| v.is_block_scalar()) {
                    block_owner = Some(indent);
                }
            }
            Line::Item {
                indent,
                marker_end,
                entry,
                value,
            } => {
                builder.push_item(line, indent, marker_end, entry, value);
                let inline = entry.and_then(|e| e.value).or(value);
                if inline.is_some_and(|v| v.is_block_scalar()) {
                    block_owner = Some(indent);
                }
            }
        }
    }

    let result = builder.finish(line_indents, issues);
    tracing::debug!(
        nodes = result.node_count(),
        issues = result.issues().len(),
        "parsed compose document"
    );
    result
}

struct TreeBuilder {
    nodes: Vec<KeyNode>,
    /// Open nodes, innermost last. The root is implicit below the bottom.
    stack: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self {
            nodes: vec![KeyNode::root()],
            stack: Vec::new(),
        }
    }
}

impl TreeBuilder {
    /// Close every open node at or deeper than `indent` and return the parent
    /// a node at `indent` attaches to.
    fn open_parent(&mut self, indent: usize) -> NodeId {
        while let Some(&top) = self.stack.last() {
            if self.nodes[top.index()].indent < indent {
                break;
            }
            self.stack.pop();
        }
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    fn push_key(&mut self, line: u32, indent: usize, entry: Entry<'_>) {
        let parent = self.open_parent(indent);
        let path = self.nodes[parent.index()]
            .path
            .child(PathSegment::key(entry.key));
        let (value, value_span) = split_value(entry.value);
        self.insert(KeyNode {
            path,
            key: entry.key.into(),
            entry: EntryKind::Key,
            // Containers are settled once their children are known.
            kind: ValueKind::Scalar,
            indent,
            line,
            key_span: entry.key_span,
            value,
            value_span,
            children: Vec::new(),
            parent: Some(parent),
        });
    }

    fn push_item(
        &mut self,
        line: u32,
        indent: usize,
        marker_end: u32,
        entry: Option<Entry<'_>>,
        value: Option<Value<'_>>,
    ) {
        let parent = self.open_parent(indent);
        let position = self.nodes[parent.index()]
            .children
            .iter()
            .filter(|c| self.nodes[c.index()].entry == EntryKind::Item)
            .count();
        let path = self.nodes[parent.index()]
            .path
            .child(PathSegment::Index(position as u32));

        let dash = indent as u32;
        let (key, key_span, kind, inline) = match entry {
            Some(entry) => (
                SmolStr::from(entry.key),
                ColumnSpan::new(dash, entry.key_span.end),
                ValueKind::Mapping,
                entry.value,
            ),
            None => (
                SmolStr::default(),
                ColumnSpan::new(dash, marker_end),
                ValueKind::Scalar,
                value,
            ),
        };
        let (value, value_span) = split_value(inline);
        self.insert(KeyNode {
            path,
            key,
            entry: EntryKind::Item,
            kind,
            indent,
            line,
            key_span,
            value,
            value_span,
            children: Vec::new(),
            parent: Some(parent),
        });
    }

    fn insert(&mut self, node: KeyNode) {
        let id = NodeId(self.nodes.len() as u32);
        if let Some(parent) = node.parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(node);
        self.stack.push(id);
    }

    fn finish(mut self, line_indents: Vec<Option<usize>>, issues: Vec<Issue>) -> ParseResult {
        for i in 1..self.nodes.len() {
            let node = &self.nodes[i];
            if node.has_value() || node.kind == ValueKind::Mapping {
                continue;
            }
            let kind = match node.children.first() {
                Some(first) => match self.nodes[first.index()].entry {
                    EntryKind::Key => ValueKind::Mapping,
                    EntryKind::Item => ValueKind::Sequence,
                },
                None => ValueKind::Scalar,
            };
            self.nodes[i].kind = kind;
        }

        let index = self
            .nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, node)| IndexEntry {
                line: node.line,
                span: node.columns(),
                node: NodeId(i as u32),
            })
            .collect();

        ParseResult {
            nodes: self.nodes,
            index,
            line_indents,
            issues,
        }
    }
}

fn split_value(value: Option<Value<'_>>) -> (Option<SmolStr>, Option<ColumnSpan>) {
    match value {
        Some(v) => (Some(v.text.into()), Some(v.span)),
        None => (None, None),
    }
}
