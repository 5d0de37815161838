//! EditBuffer - the command line text with its cursor and selection.

use super::buffer::StringBuffer;
use super::selection::Selection;

/// Editable single-line text with a cursor and an optional selection.
///
/// Invariants: `cursor <= len_chars()`, the selection lies within the text,
/// and the selection head always equals the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    buffer: StringBuffer,
    cursor: usize,
    selection: Selection,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text` with the cursor at its end
    pub fn from_text(text: &str) -> Self {
        let mut state = Self::new();
        state.set_text(text);
        state
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// `(start, length)` of the current selection, if any
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection.as_start_len()
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer
            .slice(self.selection.start()..self.selection.end())
    }

    pub fn cursor_at_end(&self) -> bool {
        self.cursor == self.len_chars()
    }

    /// Collapse selection to cursor position
    pub fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.cursor);
    }

    /// Replace the whole text. The cursor lands at the end, selection is cleared.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.cursor = self.buffer.len_chars();
        self.collapse_selection();
    }

    /// Place the cursor (clamped to the text) and clear the selection
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len_chars());
        self.collapse_selection();
    }

    /// Select from `anchor` to `head` (both clamped); the cursor goes to `head`
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        let text_len = self.len_chars();
        self.selection = Selection::new(anchor.min(text_len), head.min(text_len));
        self.cursor = self.selection.head;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.collapse_selection();
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl EditBuffer {
    fn finish_move(&mut self, extend_selection: bool) {
        if extend_selection {
            self.selection.extend_to(self.cursor);
        } else {
            self.collapse_selection();
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        // Handle selection collapse if not extending
        if !extend_selection && self.has_selection() {
            self.cursor = self.selection.start();
            self.collapse_selection();
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.finish_move(extend_selection);
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            self.cursor = self.selection.end();
            self.collapse_selection();
            return;
        }
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
        self.finish_move(extend_selection);
    }

    /// Move cursor to start of line
    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.cursor = 0;
        self.finish_move(extend_selection);
    }

    /// Move cursor to end of line
    pub fn move_line_end(&mut self, extend_selection: bool) {
        self.cursor = self.len_chars();
        self.finish_move(extend_selection);
    }

    /// Select all text
    pub fn select_all(&mut self) {
        let len = self.len_chars();
        self.selection = Selection::new(0, len);
        self.cursor = len;
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl EditBuffer {
    /// Remove the selected text, leaving the cursor at its start.
    /// Returns the removed text (empty if there was no selection).
    fn take_selection(&mut self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        let start = self.selection.start();
        let end = self.selection.end();
        let removed = self.buffer.slice(start..end);
        self.buffer.remove(start..end);
        self.cursor = start;
        self.collapse_selection();
        removed
    }

    /// Insert a character at the cursor, replacing the selection if any
    pub fn insert_char(&mut self, ch: char) {
        self.take_selection();
        self.buffer.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.collapse_selection();
    }

    /// Insert text at the cursor, replacing the selection if any.
    ///
    /// The cursor ends up right after the inserted text. When `select` is
    /// set, the inserted span becomes the new selection so the next
    /// keystroke overwrites it.
    pub fn insert_at_cursor(&mut self, text: &str, select: bool) {
        self.take_selection();
        let start = self.cursor;
        self.buffer.insert(start, text);
        let len = text.chars().count();
        self.cursor = start + len;
        if select {
            self.selection = Selection::from_start_len(start, len);
        } else {
            self.collapse_selection();
        }
    }

    /// Delete character before cursor (Backspace).
    /// Returns true if the text changed.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            self.take_selection();
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        self.buffer.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        self.collapse_selection();
        true
    }

    /// Delete character after cursor (Delete key).
    /// Returns true if the text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            self.take_selection();
            return true;
        }
        if self.cursor >= self.len_chars() {
            return false;
        }
        self.buffer.remove(self.cursor..self.cursor + 1);
        true
    }
}
