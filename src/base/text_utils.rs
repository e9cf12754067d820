//! Text manipulation utilities for working with source lines.

/// Check if a character is part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character can appear in a Compose key or stage name.
///
/// Compose keys routinely contain `-` and `.` (`x-common`, `com.example.label`).
#[inline]
pub fn is_key_character(c: char) -> bool {
    is_word_character(c) || c == '-' || c == '.'
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(
    chars: &[char],
    position: usize,
    is_part: impl Fn(char) -> bool,
) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_part(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_part(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_part(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Number of leading ASCII spaces.
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// Check if a line is empty or only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Convert a character column to a byte offset within `line`, clamping to the line end.
pub fn char_to_byte(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

/// Convert a byte offset within `line` to a character column.
pub fn byte_to_char(line: &str, offset: usize) -> u32 {
    let offset = offset.min(line.len());
    line.char_indices().take_while(|(i, _)| *i < offset).count() as u32
}

/// The text of line `line` (0-indexed), without its terminator.
pub fn nth_line(text: &str, line: u32) -> Option<&str> {
    text.lines().nth(line as usize)
}
