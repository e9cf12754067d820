//! Foundation types shared by both parsers and the IDE layer.
//!
//! - [`Position`], [`Span`], [`ColumnSpan`] - 0-indexed line/column positions
//! - [`KeyPath`], [`PathSegment`] - addresses of Compose keys
//! - [`LineIndex`], [`LineCol`] - flat offset to line/column conversion
//! - [`text_utils`] - cursor-word and column helpers
//!
//! This module has NO dependencies on other crate modules.

mod key_path;
mod line_index;
mod position;
pub mod text_utils;

pub use key_path::{KeyPath, PathSegment};
pub use line_index::{LineCol, LineIndex};
pub use position::{ColumnSpan, Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
