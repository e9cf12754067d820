//! Cursor-to-node resolution shared by both document kinds.

use crate::base::Position;

/// Which part of a node the cursor is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodePart {
    /// The key or keyword token (or the indentation before it).
    Key,
    /// The value or argument text after the key.
    Value,
    /// Inside the node's body but not on one of its children: where a new
    /// child would be typed. The root sentinel always resolves with this part.
    Body,
}

/// The result of resolving a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution<N> {
    pub node: N,
    pub part: NodePart,
}

impl<N> Resolution<N> {
    pub fn new(node: N, part: NodePart) -> Self {
        Self { node, part }
    }
}

/// Parse outputs that can map a cursor position to a node.
///
/// Resolution is total: every position, including those outside the
/// document, yields a node (the root sentinel when nothing encloses it).
pub trait Resolve {
    type Node: Copy;

    fn resolve(&self, position: Position) -> Resolution<Self::Node>;
}
