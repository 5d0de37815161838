//! Command history with prefix-filtered recall

use tracing::debug;

use crate::messages::Direction;

/// Text the buffer should show after a history move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRecall {
    /// A past entry was selected
    Entry(String),
    /// Browsing ended; this is the text typed before browsing began
    Restored(String),
}

impl HistoryRecall {
    pub fn text(&self) -> &str {
        match self {
            HistoryRecall::Entry(text) | HistoryRecall::Restored(text) => text,
        }
    }
}

/// Past commands in chronological order, plus the browsing position.
///
/// `index` is `None` while not browsing, otherwise a valid position in
/// `entries`. Position `entries.len()` is the synthetic "past the end" slot
/// that means "return to the typed text" and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    index: Option<usize>,
    prefix_filter: String,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    pub fn prefix_filter(&self) -> &str {
        &self.prefix_filter
    }

    /// Record the text typed by the user; it anchors filtered recall
    pub fn set_prefix_filter(&mut self, text: &str) {
        self.prefix_filter.clear();
        self.prefix_filter.push_str(text);
    }

    /// Stop browsing and forget the typed text
    pub fn reset(&mut self) {
        self.index = None;
        self.prefix_filter.clear();
    }

    /// Install a new list of entries.
    ///
    /// If browsing was in progress it is exited first, and the typed text
    /// that should be put back in the buffer is returned.
    pub fn replace(&mut self, entries: Vec<String>) -> Option<String> {
        let restored = self
            .is_browsing()
            .then(|| std::mem::take(&mut self.prefix_filter));
        self.entries = entries;
        self.reset();
        debug!(target: "history", len = self.entries.len(), "history replaced");
        restored
    }

    /// Step one entry back or forward.
    ///
    /// Without a prefix filter this moves by one, stopping at the oldest
    /// entry and at the past-the-end slot. With a filter it skips entries
    /// that do not start with it. Running off the newest end returns to the
    /// typed text and keeps the filter so the user can keep refining it.
    pub fn navigate(&mut self, direction: Direction) -> Option<HistoryRecall> {
        let len = self.entries.len();
        let current = self.index.unwrap_or(len);

        if self.prefix_filter.is_empty() {
            let target = current.checked_add_signed(direction.delta())?;
            return self.set_index(target);
        }

        let mut probe = current as isize;
        loop {
            probe += direction.delta();
            if probe < 0 || probe >= len as isize {
                break;
            }
            let candidate = probe as usize;
            if self.entries[candidate].starts_with(&self.prefix_filter) {
                return self.set_index(candidate);
            }
        }

        if probe >= len as isize {
            // Only a step from the newest entry lands on the past-the-end slot
            let saved_filter = self.prefix_filter.clone();
            let recall = self.set_index(probe as usize);
            self.prefix_filter = saved_filter;
            return recall;
        }

        debug!(target: "history", filter = %self.prefix_filter, "no older match");
        None
    }

    /// Select an explicit entry, or `len()` to stop browsing.
    /// Indices past `len()` are ignored.
    pub fn set_index(&mut self, index: usize) -> Option<HistoryRecall> {
        let len = self.entries.len();
        if index > len {
            return None;
        }

        if index == len {
            let restored = std::mem::take(&mut self.prefix_filter);
            self.reset();
            debug!(target: "history", "browsing ended");
            return Some(HistoryRecall::Restored(restored));
        }

        self.index = Some(index);
        debug!(target: "history", index, "entry selected");
        Some(HistoryRecall::Entry(self.entries[index].clone()))
    }

    /// Suffix of the most recent entry that starts with `prefix`
    pub fn matching_suffix(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| entry.strip_prefix(prefix))
    }
}
