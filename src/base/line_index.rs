//! Conversion between flat byte offsets and line/column positions.

use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};

use super::Position;

/// A line/column pair produced by [`LineIndex::line_col`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column, counted in characters.
    pub col: u32,
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Position::new(lc.line, lc.col)
    }
}

/// Maps byte offsets in a document to line/column positions and back.
///
/// Only lines containing multi-byte characters keep a per-character table;
/// ASCII lines convert columns arithmetically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
    /// For non-ASCII lines: line-relative byte offset of every character.
    wide_lines: FxHashMap<u32, Vec<TextSize>>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut wide_lines = FxHashMap::default();

        let mut line = 0u32;
        let mut line_start = 0usize;
        let mut chars = Vec::new();
        let mut wide = false;

        for (offset, c) in text.char_indices() {
            chars.push(TextSize::new((offset - line_start) as u32));
            if !c.is_ascii() {
                wide = true;
            }
            if c == '\n' {
                if wide {
                    wide_lines.insert(line, std::mem::take(&mut chars));
                }
                chars.clear();
                wide = false;
                line += 1;
                line_start = offset + 1;
                line_starts.push(TextSize::new(line_start as u32));
            }
        }
        if wide {
            wide_lines.insert(line, chars);
        }

        Self {
            line_starts,
            wide_lines,
            len: TextSize::of(text),
        }
    }

    /// Number of lines (a trailing newline opens one more, empty line).
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Byte range of a line, excluding its newline.
    pub fn line_range(&self, line: u32) -> Option<TextRange> {
        let start = *self.line_starts.get(line as usize)?;
        let end = self
            .line_starts
            .get(line as usize + 1)
            .map(|next| *next - TextSize::new(1))
            .unwrap_or(self.len);
        Some(TextRange::new(start, end.max(start)))
    }

    /// Line/column of a byte offset. Offsets past the end clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|start| *start <= offset) - 1;
        let rel = offset - self.line_starts[line];
        let col = match self.wide_lines.get(&(line as u32)) {
            Some(chars) => chars.partition_point(|c| *c < rel) as u32,
            None => u32::from(rel),
        };
        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Byte offset of a line/column. Columns past the line end clamp to it.
    pub fn offset(&self, lc: LineCol) -> Option<TextSize> {
        let range = self.line_range(lc.line)?;
        let rel = match self.wide_lines.get(&lc.line) {
            Some(chars) => chars
                .get(lc.col as usize)
                .copied()
                .unwrap_or_else(|| range.len()),
            None => TextSize::new(lc.col),
        };
        Some(range.start() + rel.min(range.len()))
    }
}
