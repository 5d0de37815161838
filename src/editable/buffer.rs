//! Single-line string buffer addressed by character offsets.

use std::ops::Range;

/// Text storage for the command line, backed by `String`.
///
/// All offsets are character (Unicode scalar) offsets, never byte offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get slice of text as String (by character indices, clamped)
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Insert text at character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    /// Insert single character at character offset
    pub fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    /// Remove text in character range
    pub fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Set content, replacing everything
    pub fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    /// Convert char offset to byte offset (clamped to the end of the text)
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
