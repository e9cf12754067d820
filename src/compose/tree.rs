//! Arena-backed key tree produced by the Compose parser.

use smol_str::SmolStr;

use crate::base::{ColumnSpan, KeyPath, Span};
use crate::syntax::Issue;

/// Index of a node in [`ParseResult`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(super) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// How a node was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    /// `key:` or `key: value`
    Key,
    /// `- value` or `- key: value`
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Mapping,
    Scalar,
    Sequence,
}

/// One parsed key or sequence item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyNode {
    pub path: KeyPath,
    /// Key text, unquoted. For `- key: value` items this is the inline key;
    /// other items have an empty key.
    pub key: SmolStr,
    pub entry: EntryKind,
    pub kind: ValueKind,
    /// Leading spaces; for items, the column of the `-`.
    pub indent: usize,
    pub line: u32,
    pub key_span: ColumnSpan,
    /// Inline value as written, comments stripped. Quoted and flow values
    /// are kept verbatim.
    pub value: Option<SmolStr>,
    pub value_span: Option<ColumnSpan>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl KeyNode {
    pub(super) fn root() -> Self {
        Self {
            path: KeyPath::root(),
            key: SmolStr::default(),
            entry: EntryKind::Key,
            kind: ValueKind::Mapping,
            indent: 0,
            line: 0,
            key_span: ColumnSpan::default(),
            value: None,
            value_span: None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Whether new keys may be typed directly beneath this node.
    pub fn accepts_keys(&self) -> bool {
        !self.has_value() && self.kind != ValueKind::Sequence
    }

    pub fn has_value(&self) -> bool {
        self.value_span.is_some()
    }

    /// Key token through the end of the inline value.
    pub fn columns(&self) -> ColumnSpan {
        let end = self.value_span.map_or(self.key_span.end, |v| v.end);
        ColumnSpan::new(self.key_span.start, end)
    }

    pub fn span(&self) -> Span {
        Span::on_line(self.line, self.columns())
    }
}

/// One row of the flat position index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub line: u32,
    pub span: ColumnSpan,
    pub node: NodeId,
}

/// Output of [`parse`](super::parse): the key tree plus lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub(super) nodes: Vec<KeyNode>,
    /// Sorted by `(line, span.start)`.
    pub(super) index: Vec<IndexEntry>,
    /// Leading spaces per physical line; `None` for whitespace-only lines.
    pub(super) line_indents: Vec<Option<usize>>,
    pub(super) issues: Vec<Issue>,
}

impl ParseResult {
    pub fn root(&self) -> &KeyNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&KeyNode> {
        self.nodes.get(id.index())
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &KeyNode)> {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&child| (child, &self.nodes[child.index()]))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Child by key. With duplicate keys the last one wins.
    pub fn child_by_key(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.children(id)
            .filter(|(_, node)| node.entry == EntryKind::Key && node.key == key)
            .map(|(child, _)| child)
            .last()
    }

    /// Follow a chain of keys from the root.
    pub fn find<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Option<NodeId> {
        keys.into_iter()
            .try_fold(NodeId::ROOT, |id, key| self.child_by_key(id, key))
    }

    /// Number of nodes, not counting the synthetic root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// All non-root nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &KeyNode)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn line_count(&self) -> usize {
        self.line_indents.len()
    }

    /// The node that starts on `line`, if any.
    pub fn node_on_line(&self, line: u32) -> Option<NodeId> {
        let i = self.index.partition_point(|e| e.line < line);
        self.index
            .get(i)
            .filter(|e| e.line == line)
            .map(|e| e.node)
    }

    pub(super) fn line_indent(&self, line: u32) -> Option<usize> {
        self.line_indents.get(line as usize).copied().flatten()
    }
}
