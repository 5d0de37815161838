//! Selection type for the command line buffer.

/// A text selection with anchor (start point) and head (cursor position),
/// both character offsets into the buffer.
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Selection covering `start..start + len`, with the head at the end
    pub fn from_start_len(start: usize, len: usize) -> Self {
        Self {
            anchor: start,
            head: start + len,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// `(start, length)` of a non-empty selection
    pub fn as_start_len(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            None
        } else {
            Some((self.start(), self.len()))
        }
    }

    /// Extend selection to new head position
    pub fn extend_to(&mut self, offset: usize) {
        self.head = offset;
    }

    /// Collapse selection to head position
    pub fn collapse(&mut self) {
        self.anchor = self.head;
    }
}
