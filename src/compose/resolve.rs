//! Cursor resolution over the Compose key tree.

use super::tree::{NodeId, ParseResult};
use crate::base::Position;
use crate::syntax::{NodePart, Resolution, Resolve};

impl ParseResult {
    /// The node a new key typed at `position` would belong to.
    ///
    /// The cursor line's effective indent is its leading whitespace (or the
    /// cursor column when it sits inside that whitespace, or the line is
    /// blank). Starting from the last node above the cursor, parents are
    /// climbed until one is indented less than that.
    pub fn container_at(&self, position: Position) -> NodeId {
        let column = position.column as usize;
        let indent = match self.line_indent(position.line) {
            Some(leading) => leading.min(column),
            None => column,
        };

        let above = self.index.partition_point(|e| e.line < position.line);
        let Some(start) = above.checked_sub(1).map(|i| self.index[i].node) else {
            return NodeId::ROOT;
        };

        let mut id = start;
        while !id.is_root() {
            let node = &self.nodes[id.index()];
            if node.indent < indent {
                break;
            }
            id = node.parent.unwrap_or(NodeId::ROOT);
        }
        tracing::trace!(?position, indent, container = id.index(), "container");
        id
    }
}

impl Resolve for ParseResult {
    type Node = NodeId;

    fn resolve(&self, position: Position) -> Resolution<NodeId> {
        if let Some(id) = self.node_on_line(position.line) {
            let node = &self.nodes[id.index()];
            if position.column >= node.key_span.start {
                let part = if node.key_span.touches(position.column) {
                    NodePart::Key
                } else {
                    NodePart::Value
                };
                return Resolution::new(id, part);
            }
        }
        Resolution::new(self.container_at(position), NodePart::Body)
    }
}
