//! Docker Compose structural parsing.
//!
//! The parser recovers a key tree from indentation alone. It does not
//! implement YAML: quoted and flow values are opaque scalars, anchors and
//! multi-document streams are not interpreted, and lines it cannot place are
//! left out of the tree (see [`ParseResult::issues`]).
//!
//! ```text
//! services:          services            Mapping
//!   web:             services.web        Mapping
//!     ports:         services.web.ports  Sequence
//!       - "80:80"    ...ports[0]         Scalar
//! ```

mod line;
mod parser;
mod resolve;
mod tree;
mod version;

pub use parser::parse;
pub use tree::{EntryKind, IndexEntry, KeyNode, NodeId, ParseResult, ValueKind};
pub use version::{declared_version, detect_variant};
